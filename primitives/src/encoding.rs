pub trait ToHexString {
  /// `0x` prefixed lowercase hex rendering.
  fn to_hex(&self) -> String;
}

impl<const N: usize> ToHexString for [u8; N] {
  fn to_hex(&self) -> String {
    format!("0x{}", hex::encode(self))
  }
}
