use crate::convert::Conversion;
use crate::error::ConvertError;
use crate::int::Integer;
use crate::uuid::Uuid;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

/// String to integer conversion in a caller-specified radix
pub struct StringToInt<T> {
    radix: u32,
    _marker: PhantomData<T>,
}

pub fn string_to_int<T: Integer>() -> StringToInt<T> {
    string_to_int_radix(10)
}

pub fn string_to_int_radix<T: Integer>(radix: u32) -> StringToInt<T> {
    assert!((2..=36).contains(&radix), "radix not in range 2..=36");
    StringToInt {
        radix,
        _marker: PhantomData,
    }
}

impl<T: Integer> Conversion for StringToInt<T> {
    type Input = String;
    type Output = T;

    fn apply(&self, input: String) -> Result<T, ConvertError> {
        T::from_str_radix(&input, self.radix)
            .map_err(|_| ConvertError::new(format!("invalid integer {:?}", input)))
    }

    fn unapply(&self, output: T) -> Result<String, ConvertError> {
        Ok(output.format_radix(self.radix))
    }
}

/// Conversion between a string and any type with a lossless textual form
pub struct Lossless<T> {
    _marker: PhantomData<T>,
}

pub fn lossless<T: FromStr + Display>() -> Lossless<T> {
    Lossless {
        _marker: PhantomData,
    }
}

/// String to floating point conversion
pub fn string_to_float<F: FromStr + Display>() -> Lossless<F> {
    lossless()
}

/// String to UUID conversion, printing the canonical uppercase form
pub fn string_to_uuid() -> Lossless<Uuid> {
    lossless()
}

impl<T: FromStr + Display> Conversion for Lossless<T> {
    type Input = String;
    type Output = T;

    fn apply(&self, input: String) -> Result<T, ConvertError> {
        input
            .parse()
            .map_err(|_| ConvertError::new(format!("cannot convert {:?}", input)))
    }

    fn unapply(&self, output: T) -> Result<String, ConvertError> {
        Ok(output.to_string())
    }
}

/// String to boolean conversion accepting "true"/"1" and "false"/"0"
pub struct StringToBool;

pub fn string_to_bool() -> StringToBool {
    StringToBool
}

impl Conversion for StringToBool {
    type Input = String;
    type Output = bool;

    fn apply(&self, input: String) -> Result<bool, ConvertError> {
        match input.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConvertError::new(format!("invalid boolean {:?}", input))),
        }
    }

    fn unapply(&self, output: bool) -> Result<String, ConvertError> {
        Ok(if output { "true" } else { "false" }.to_string())
    }
}

/// UTF-8 bytes to String conversion
pub struct Utf8;

pub fn utf8() -> Utf8 {
    Utf8
}

impl Conversion for Utf8 {
    type Input = Vec<u8>;
    type Output = String;

    fn apply(&self, input: Vec<u8>) -> Result<String, ConvertError> {
        String::from_utf8(input).map_err(|_| ConvertError::new("invalid UTF-8"))
    }

    fn unapply(&self, output: String) -> Result<Vec<u8>, ConvertError> {
        Ok(output.into_bytes())
    }
}

/// Types representable by a backing raw value, such as a fieldless enum and
/// its discriminant
pub trait RawRepresentable: Sized {
    type Raw;

    fn from_raw(raw: Self::Raw) -> Option<Self>;

    fn to_raw(&self) -> Self::Raw;
}

/// Conversion between a raw-representable type and its backing value
pub struct Raw<T> {
    _marker: PhantomData<T>,
}

pub fn raw<T: RawRepresentable>() -> Raw<T> {
    Raw {
        _marker: PhantomData,
    }
}

impl<T: RawRepresentable> Conversion for Raw<T> {
    type Input = T::Raw;
    type Output = T;

    fn apply(&self, input: T::Raw) -> Result<T, ConvertError> {
        T::from_raw(input).ok_or_else(|| ConvertError::new("no variant for raw value"))
    }

    fn unapply(&self, output: T) -> Result<T::Raw, ConvertError> {
        Ok(output.to_raw())
    }
}
