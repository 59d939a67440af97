pub mod prims;

pub use prims::{
    Lossless, Raw, RawRepresentable, StringToBool, StringToInt, Utf8, lossless, raw,
    string_to_bool, string_to_float, string_to_int, string_to_int_radix, string_to_uuid, utf8,
};

use crate::error::ConvertError;
use std::rc::Rc;

/// A pure, fallible bidirectional mapping between two value types
///
/// Conversions are the bridge between parsed primitives and domain values:
/// `apply` runs on the parse direction, `unapply` on the print direction.
/// Both legs may fail independently. A conversion is constructed once, holds
/// no state, and is reusable across parses.
///
/// Lawful conversions satisfy `unapply(apply(x)) == x` for every `x` that
/// `apply` accepts, and symmetrically for `unapply`.
pub trait Conversion {
    type Input;
    type Output;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, ConvertError>;

    fn unapply(&self, output: Self::Output) -> Result<Self::Input, ConvertError>;

    /// Chain another conversion after this one, left to right
    fn then<C>(self, next: C) -> Chained<Self, C>
    where
        Self: Sized,
        C: Conversion<Input = Self::Output>,
    {
        Chained { first: self, second: next }
    }

    /// Swap the two directions
    fn invert(self) -> Inverted<Self>
    where
        Self: Sized,
    {
        Inverted { inner: self }
    }

    /// Try this conversion, falling back to another; when both legs succeed
    /// and the target supports an associative combine, results are merged
    fn or_else<C>(self, fallback: C) -> Fallback<Self, C>
    where
        Self: Sized,
        C: Conversion<Input = Self::Input, Output = Self::Output>,
    {
        Fallback { first: self, second: fallback }
    }

    /// Erase the concrete conversion type behind boxed closures
    fn erased(self) -> AnyConversion<Self::Input, Self::Output>
    where
        Self: Sized + 'static,
    {
        let this = Rc::new(self);
        let other = Rc::clone(&this);
        AnyConversion::new(move |input| this.apply(input), move |output| other.unapply(output))
    }
}

/// The identity conversion
pub struct Identity<A> {
    _marker: std::marker::PhantomData<A>,
}

pub fn identity<A>() -> Identity<A> {
    Identity {
        _marker: std::marker::PhantomData,
    }
}

impl<A> Conversion for Identity<A> {
    type Input = A;
    type Output = A;

    fn apply(&self, input: A) -> Result<A, ConvertError> {
        Ok(input)
    }

    fn unapply(&self, output: A) -> Result<A, ConvertError> {
        Ok(output)
    }
}

/// Sequential composition of two conversions
pub struct Chained<A, B> {
    first: A,
    second: B,
}

impl<A, B> Conversion for Chained<A, B>
where
    A: Conversion,
    B: Conversion<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, ConvertError> {
        self.second.apply(self.first.apply(input)?)
    }

    fn unapply(&self, output: Self::Output) -> Result<Self::Input, ConvertError> {
        self.first.unapply(self.second.unapply(output)?)
    }
}

/// A conversion with apply and unapply swapped
pub struct Inverted<C> {
    inner: C,
}

impl<C: Conversion> Conversion for Inverted<C> {
    type Input = C::Output;
    type Output = C::Input;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, ConvertError> {
        self.inner.unapply(input)
    }

    fn unapply(&self, output: Self::Output) -> Result<Self::Input, ConvertError> {
        self.inner.apply(output)
    }
}

/// Values with an associative combine, used by [`Fallback`] to merge the
/// results of two succeeding conversions
pub trait Combinable {
    fn combine(self, other: Self) -> Self;
}

impl Combinable for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Combinable for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Combinable for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Monoid-style combination: tries the first conversion, falls back to the
/// second, and merges when both succeed
pub struct Fallback<A, B> {
    first: A,
    second: B,
}

impl<A, B> Conversion for Fallback<A, B>
where
    A: Conversion,
    B: Conversion<Input = A::Input, Output = A::Output>,
    A::Input: Clone,
    A::Output: Combinable + Clone,
{
    type Input = A::Input;
    type Output = A::Output;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, ConvertError> {
        match self.first.apply(input.clone()) {
            Ok(left) => match self.second.apply(input) {
                Ok(right) => Ok(left.combine(right)),
                Err(_) => Ok(left),
            },
            Err(_) => self.second.apply(input),
        }
    }

    fn unapply(&self, output: Self::Output) -> Result<Self::Input, ConvertError> {
        match self.first.unapply(output.clone()) {
            Ok(input) => Ok(input),
            Err(_) => self.second.unapply(output),
        }
    }
}

/// A type-erased conversion holding one closure per direction
///
/// Useful for crossing API boundaries and for hand-written embed/extract
/// pairs projecting a value into one variant of a sum type.
pub struct AnyConversion<A, B> {
    apply_fn: Box<dyn Fn(A) -> Result<B, ConvertError>>,
    unapply_fn: Box<dyn Fn(B) -> Result<A, ConvertError>>,
}

impl<A, B> AnyConversion<A, B> {
    pub fn new(
        apply: impl Fn(A) -> Result<B, ConvertError> + 'static,
        unapply: impl Fn(B) -> Result<A, ConvertError> + 'static,
    ) -> Self {
        Self {
            apply_fn: Box::new(apply),
            unapply_fn: Box::new(unapply),
        }
    }

    /// Build a conversion from an embed/extract pair for one variant of a
    /// tagged union: `embed` wraps a payload into the variant, `extract`
    /// recovers the payload when the value is that variant
    pub fn case(
        embed: impl Fn(A) -> B + 'static,
        extract: impl Fn(B) -> Option<A> + 'static,
    ) -> Self {
        Self::new(
            move |input| Ok(embed(input)),
            move |output| extract(output).ok_or_else(|| ConvertError::new("no matching case")),
        )
    }
}

impl<A, B> Conversion for AnyConversion<A, B> {
    type Input = A;
    type Output = B;

    fn apply(&self, input: A) -> Result<B, ConvertError> {
        (self.apply_fn)(input)
    }

    fn unapply(&self, output: B) -> Result<A, ConvertError> {
        (self.unapply_fn)(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let conversion = identity::<i32>();
        assert_eq!(conversion.apply(7).unwrap(), 7);
        assert_eq!(conversion.unapply(7).unwrap(), 7);
    }

    #[test]
    fn test_chained_both_directions() {
        let conversion = string_to_int::<i64>().then(AnyConversion::new(
            |n: i64| Ok(n * 2),
            |n: i64| Ok(n / 2),
        ));
        assert_eq!(conversion.apply("21".to_string()).unwrap(), 42);
        assert_eq!(conversion.unapply(42).unwrap(), "21");
    }

    #[test]
    fn test_chained_propagates_failure_of_either_leg() {
        let conversion = string_to_int::<i64>().then(identity());
        assert!(conversion.apply("nope".to_string()).is_err());
    }

    #[test]
    fn test_inverted_swaps_directions() {
        let conversion = string_to_int::<i64>().invert();
        assert_eq!(conversion.apply(7).unwrap(), "7");
        assert_eq!(conversion.unapply("7".to_string()).unwrap(), 7);
    }

    #[test]
    fn test_case_embed_extract() {
        #[derive(Debug, Clone, PartialEq)]
        enum Value {
            Number(i64),
            Text(String),
        }

        let number = AnyConversion::case(Value::Number, |value| match value {
            Value::Number(n) => Some(n),
            _ => None,
        });

        assert_eq!(number.apply(3).unwrap(), Value::Number(3));
        assert_eq!(number.unapply(Value::Number(3)).unwrap(), 3);
        assert!(number.unapply(Value::Text("hi".into())).is_err());
    }

    /// Succeeds when the input contains `letter`, producing `tag`; unapply
    /// recovers the letter from outputs carrying the tag.
    fn contains(letter: char, tag: &'static str) -> AnyConversion<String, String> {
        AnyConversion::new(
            move |input: String| {
                if input.contains(letter) {
                    Ok(tag.to_string())
                } else {
                    Err(ConvertError::new("letter not present"))
                }
            },
            move |output: String| {
                if output.contains(tag) {
                    Ok(letter.to_string())
                } else {
                    Err(ConvertError::new("tag not present"))
                }
            },
        )
    }

    #[test]
    fn test_fallback_left_succeeds_alone() {
        let conversion = contains('a', "first").or_else(contains('b', "second"));
        assert_eq!(conversion.apply("cat".to_string()).unwrap(), "first");
    }

    #[test]
    fn test_fallback_uses_right_when_left_fails() {
        let conversion = contains('a', "first").or_else(contains('b', "second"));
        assert_eq!(conversion.apply("web".to_string()).unwrap(), "second");
    }

    #[test]
    fn test_fallback_merges_when_both_succeed() {
        let conversion = contains('a', "first").or_else(contains('b', "second"));
        assert_eq!(conversion.apply("ab".to_string()).unwrap(), "firstsecond");
    }

    #[test]
    fn test_fallback_fails_when_both_fail() {
        let conversion = contains('a', "first").or_else(contains('b', "second"));
        assert!(conversion.apply("xyz".to_string()).is_err());
    }

    #[test]
    fn test_fallback_unapply_tries_left_then_right() {
        let conversion = contains('a', "first").or_else(contains('b', "second"));
        assert_eq!(conversion.unapply("first".to_string()).unwrap(), "a");
        assert_eq!(conversion.unapply("second".to_string()).unwrap(), "b");
        assert!(conversion.unapply("neither".to_string()).is_err());
    }

    #[test]
    fn test_combinable_merges_sequences() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
        assert_eq!("ab".to_string().combine("cd".to_string()), "abcd");
    }

    #[test]
    fn test_erased_delegates() {
        let conversion = string_to_int::<i64>().erased();
        assert_eq!(conversion.apply("5".to_string()).unwrap(), 5);
        assert_eq!(conversion.unapply(5).unwrap(), "5");
    }

    #[test]
    fn test_round_trip_law() {
        let conversion = string_to_int::<i64>();
        let input = "12345".to_string();
        let output = conversion.apply(input.clone()).unwrap();
        assert_eq!(conversion.unapply(output).unwrap(), input);
    }
}
