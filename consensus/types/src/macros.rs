/// Implements SSZ encoding/decoding, vector merkleization and 0x-prefixed
/// hex serde for a newtype wrapping a `[u8; N]`.
///
/// Fixed-length byte containers are SSZ vectors of bytes: their encoding is
/// the raw bytes and their tree-hash root is the merkleization of the padded
/// chunks, never a packed basic value.
macro_rules! impl_fixed_len_bytes {
    ($type: ident, $len: expr) => {
        impl $type {
            /// Instantiates with all-zero bytes.
            pub fn empty() -> Self {
                Self([0; $len])
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn from_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                if bytes.len() != $len {
                    return Err(ssz::DecodeError::InvalidByteLength {
                        len: bytes.len(),
                        expected: $len,
                    });
                }
                let mut array = [0; $len];
                array.copy_from_slice(bytes);
                Ok(Self(array))
            }
        }

        impl Default for $type {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl std::fmt::Debug for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}({})",
                    stringify!($type),
                    serde_utils::hex::encode(self.0)
                )
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", serde_utils::hex::encode(self.0))
            }
        }

        impl ssz::Encode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $len
            }

            fn ssz_bytes_len(&self) -> usize {
                $len
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.0)
            }
        }

        impl ssz::Decode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $len
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                Self::from_bytes(bytes)
            }
        }

        impl tree_hash::TreeHash for $type {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Vector
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                tree_hash::merkle_root(&self.0, 0)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&serde_utils::hex::encode(self.0))
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let bytes = deserializer.deserialize_str(serde_utils::hex::PrefixedHexVisitor)?;
                Self::from_bytes(&bytes).map_err(|e| {
                    serde::de::Error::custom(format!("invalid {}: {:?}", stringify!($type), e))
                })
            }
        }
    };
}
