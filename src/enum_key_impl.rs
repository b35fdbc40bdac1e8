use crate::EnumKey;

macro_rules! impl_enum_key {
    ($($t:ty),*) => {
        $(
            impl EnumKey for $t {
                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_enum_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl EnumKey for bool {
    #[inline]
    fn to_wide(self) -> i128 {
        self as i128
    }
}

impl EnumKey for char {
    #[inline]
    fn to_wide(self) -> i128 {
        self as u32 as i128
    }
}

#[cfg(test)]
mod tests {
    use crate::EnumKey;

    #[test]
    pub fn test_unsigned_extremes() {
        assert_eq!(u8::MAX.to_wide(), 255);
        assert_eq!(u64::MAX.to_wide(), u64::MAX as i128);
        assert_eq!(0usize.to_wide(), 0);
    }

    #[test]
    pub fn test_signed_keeps_sign() {
        assert_eq!((-1i8).to_wide(), -1);
        assert_eq!(i64::MIN.to_wide(), i64::MIN as i128);
        assert_eq!(42isize.to_wide(), 42);
    }

    #[test]
    pub fn test_bool_and_char() {
        assert!(false.to_wide() < true.to_wide());
        assert_eq!('a'.to_wide(), 97);
        assert!('a'.to_wide() < 'b'.to_wide());
    }
}
