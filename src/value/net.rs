/*!
# Pennant: Network Values
*/

use crate::{
	Scalar,
	ValueError,
};
use ipnet::IpNet;
use std::{
	fmt,
	net::{
		IpAddr,
		Ipv4Addr,
	},
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # IPv4 Mask.
///
/// A four-byte network mask. These can be written in dotted form
/// (`255.255.255.0`) or as eight hex digits (`ffffff00`), which is also how
/// they are rendered.
///
/// IPv6 text is accepted too, but only its last four bytes are kept.
///
/// ## Examples
///
/// ```
/// use pennant::{IpMask, Scalar};
///
/// let mask = IpMask::parse("255.255.240.0").unwrap();
/// assert_eq!(mask.octets(), [255, 255, 240, 0]);
/// assert_eq!(mask.to_string(), "fffff000");
/// assert_eq!(IpMask::parse("fffff000"), Ok(mask));
/// ```
pub struct IpMask([u8; 4]);

impl fmt::Display for IpMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&hex::encode(self.0))
	}
}

impl From<[u8; 4]> for IpMask {
	#[inline]
	fn from(src: [u8; 4]) -> Self { Self(src) }
}

impl From<Ipv4Addr> for IpMask {
	#[inline]
	fn from(src: Ipv4Addr) -> Self { Self(src.octets()) }
}

impl From<IpMask> for Ipv4Addr {
	#[inline]
	fn from(src: IpMask) -> Self { Self::from(src.0) }
}

impl IpMask {
	#[must_use]
	/// # New.
	pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self { Self([a, b, c, d]) }

	#[must_use]
	/// # Octets.
	pub const fn octets(self) -> [u8; 4] { self.0 }
}

impl Scalar for IpMask {
	const TYPE: &'static str = "ipMask";
	const SLICE_TYPE: &'static str = "ipMaskSlice";

	fn parse(raw: &str) -> Result<Self, ValueError> {
		let octets = match raw.parse::<IpAddr>() {
			Ok(IpAddr::V4(ip)) => Some(ip.octets()),
			Ok(IpAddr::V6(ip)) => {
				let [.., a, b, c, d] = ip.octets();
				Some([a, b, c, d])
			},
			Err(_) if raw.len() == 8 =>
				hex::decode(raw).ok().and_then(|v| <[u8; 4]>::try_from(v).ok()),
			Err(_) => None,
		};

		octets.map(Self)
			.ok_or_else(|| ValueError::new(format!("failed to parse IP mask: {raw:?}")))
	}

	fn render(&self) -> String { self.to_string() }
}



impl Scalar for IpNet {
	const TYPE: &'static str = "ipNet";
	const SLICE_TYPE: &'static str = "ipNetSlice";

	/// # Parse.
	///
	/// Host bits are cleared, so `192.168.1.7/16` becomes `192.168.0.0/16`.
	fn parse(raw: &str) -> Result<Self, ValueError> {
		let raw = raw.trim();
		raw.parse::<Self>()
			.map(|net| net.trunc())
			.map_err(|_| ValueError::new(format!("invalid CIDR address: {raw}")))
	}

	fn render(&self) -> String { self.to_string() }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_ip_mask() {
		for (raw, expected) in [
			("255.255.255.0", [255, 255, 255, 0]),
			("255.0.0.0", [255, 0, 0, 0]),
			("ffffff00", [255, 255, 255, 0]),
			("FFFF0000", [255, 255, 0, 0]),
			("::ffff:255.255.128.0", [255, 255, 128, 0]),
		] {
			assert_eq!(
				<IpMask as Scalar>::parse(raw),
				Ok(IpMask::from(expected)),
				"Bug: {raw} parsed wrong.",
			);
		}

		for bad in ["", "255.255.255", "fffff", "ffffffgg", "255.255.255.0/24"] {
			assert!(<IpMask as Scalar>::parse(bad).is_err(), "Bug: {bad:?} should not parse.");
		}

		let mask = IpMask::new(255, 255, 255, 128);
		assert_eq!(mask.render(), "ffffff80");
		assert_eq!(Ipv4Addr::from(mask), Ipv4Addr::new(255, 255, 255, 128));
	}

	#[test]
	fn t_ip_net() {
		let net = <IpNet as Scalar>::parse(" 192.168.1.7/16 ").expect("Net failed.");
		assert_eq!(net.render(), "192.168.0.0/16");
		assert_eq!(net.prefix_len(), 16);

		let net = <IpNet as Scalar>::parse("2001:db8::1/32").expect("Net failed.");
		assert_eq!(net.render(), "2001:db8::/32");

		for bad in ["", "192.168.1.7", "192.168.1.7/33", "nope/8"] {
			assert!(<IpNet as Scalar>::parse(bad).is_err(), "Bug: {bad:?} should not parse.");
		}
	}
}
