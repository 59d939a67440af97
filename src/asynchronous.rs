use crate::cursor::Cursor;
use crate::error::{ParseError, PrintError};
use crate::parser::Parser;
use crate::print_cursor::PrintCursor;
use crate::printer::Printer;
use std::future::Future;
use std::pin::Pin;

/// The element type an async parser's cursor iterates over
pub type AsyncElementOf<'src, P> = <<P as AsyncParser<'src>>::Cursor as Cursor<'src>>::Element;

/// Result of an async parse attempt
pub type AsyncParsed<'src, P> = Result<
    (<P as AsyncParser<'src>>::Output, <P as AsyncParser<'src>>::Cursor),
    ParseError<'src, AsyncElementOf<'src, P>>,
>;

/// The parse capability for leaves whose work is itself asynchronous, such as
/// resolving part of the input against an external service
///
/// Combinator trees stay synchronous in structure; only awaiting differs. Any
/// synchronous parser lifts into this trait through [`Synced`].
#[allow(async_fn_in_trait)]
pub trait AsyncParser<'src> {
    type Cursor: Cursor<'src>;
    type Output;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self>;
}

/// The async counterpart of [`Printer`]
#[allow(async_fn_in_trait)]
pub trait AsyncPrinter<'src>: AsyncParser<'src> {
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError>;
}

/// A synchronous parser-printer lifted into the async traits
///
/// The futures it returns complete on the first poll.
pub struct Synced<P> {
    parser: P,
}

/// Convenience function to lift a synchronous parser
pub fn synced<P>(parser: P) -> Synced<P> {
    Synced { parser }
}

impl<'src, P> AsyncParser<'src> for Synced<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        self.parser.parse(cursor)
    }
}

impl<'src, P> AsyncPrinter<'src> for Synced<P>
where
    P: Printer<'src>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        self.parser.print(output, cursor)
    }
}

/// A boxed future, the return type of [`AsyncLeaf`] closures
pub type BoxFuture<'src, T> = Pin<Box<dyn Future<Output = T> + 'src>>;

/// An async parse leaf built from a closure returning a boxed future
pub struct AsyncLeaf<'src, C: Cursor<'src>, O> {
    parse_fn:
        Box<dyn Fn(C) -> BoxFuture<'src, Result<(O, C), ParseError<'src, C::Element>>> + 'src>,
}

impl<'src, C: Cursor<'src> + 'src, O> AsyncLeaf<'src, C, O> {
    pub fn new(
        parse: impl Fn(C) -> BoxFuture<'src, Result<(O, C), ParseError<'src, C::Element>>> + 'src,
    ) -> Self {
        Self {
            parse_fn: Box::new(parse),
        }
    }
}

impl<'src, C: Cursor<'src>, O> AsyncParser<'src> for AsyncLeaf<'src, C, O> {
    type Cursor = C;
    type Output = O;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        (self.parse_fn)(cursor).await
    }
}

// Deferred construction works unchanged in the async algebra: building the
// child stays synchronous, only its parse and print awaits differ.
impl<'src, F, P> AsyncParser<'src> for crate::lazy::Lazy<F, P>
where
    F: Fn() -> P,
    P: AsyncParser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        self.inner().parse(cursor).await
    }
}

impl<'src, F, P> AsyncPrinter<'src> for crate::lazy::Lazy<F, P>
where
    F: Fn() -> P,
    P: AsyncPrinter<'src>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        self.inner().print(output, cursor).await
    }
}

/// Async sequencing, pairing two outputs like [`Then`](crate::then::Then)
pub struct AsyncThen<P1, P2> {
    first: P1,
    second: P2,
}

/// Convenience function to create an AsyncThen parser
pub fn async_then<P1, P2>(first: P1, second: P2) -> AsyncThen<P1, P2> {
    AsyncThen { first, second }
}

impl<'src, P1, P2> AsyncParser<'src> for AsyncThen<P1, P2>
where
    P1: AsyncParser<'src>,
    P2: AsyncParser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        let (first, cursor) = self.first.parse(cursor).await?;
        let (second, cursor) = self.second.parse(cursor).await?;
        Ok(((first, second), cursor))
    }
}

impl<'src, P1, P2> AsyncPrinter<'src> for AsyncThen<P1, P2>
where
    P1: AsyncPrinter<'src>,
    P2: AsyncPrinter<'src, Cursor = P1::Cursor>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let (first, second) = output;
        self.second.print(second, cursor).await?;
        self.first.print(first, cursor).await
    }
}

/// Async alternation with the same semantics as [`Or`](crate::or::Or)
pub struct AsyncOr<P1, P2> {
    first: P1,
    second: P2,
}

/// Convenience function to create an AsyncOr parser
pub fn async_or<P1, P2>(first: P1, second: P2) -> AsyncOr<P1, P2> {
    AsyncOr { first, second }
}

impl<'src, P1, P2> AsyncParser<'src> for AsyncOr<P1, P2>
where
    P1: AsyncParser<'src>,
    P2: AsyncParser<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        let first_error = match self.first.parse(cursor).await {
            Ok(success) => return Ok(success),
            Err(error) => error,
        };
        match self.second.parse(cursor).await {
            Ok(success) => Ok(success),
            Err(second_error) => Err(ParseError::many(
                vec![first_error, second_error],
                cursor.loc(),
            )),
        }
    }
}

impl<'src, P1, P2> AsyncPrinter<'src> for AsyncOr<P1, P2>
where
    P1: AsyncPrinter<'src>,
    P2: AsyncPrinter<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        let mark = cursor.mark();
        let second_error = match self.second.print(output, cursor).await {
            Ok(()) => return Ok(()),
            Err(error) => {
                cursor.restore(mark);
                error
            }
        };
        match self.first.print(output, cursor).await {
            Ok(()) => Ok(()),
            Err(first_error) => {
                cursor.restore(mark);
                Err(PrintError::many(
                    vec![first_error, second_error],
                    cursor.len(),
                ))
            }
        }
    }
}

/// Async repetition with the same semantics as [`Many`](crate::many::Many)
pub struct AsyncMany<P> {
    parser: P,
}

/// Convenience function to create an AsyncMany parser
pub fn async_many<P>(parser: P) -> AsyncMany<P> {
    AsyncMany { parser }
}

impl<'src, P> AsyncParser<'src> for AsyncMany<P>
where
    P: AsyncParser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    async fn parse(&self, mut cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        let mut outputs = Vec::new();
        loop {
            match self.parser.parse(cursor).await {
                Ok((output, next)) => {
                    let stalled = next.position() == cursor.position();
                    outputs.push(output);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok((outputs, cursor))
    }
}

impl<'src, P> AsyncPrinter<'src> for AsyncMany<P>
where
    P: AsyncPrinter<'src>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        for item in output.iter().rev() {
            self.parser.print(item, cursor).await?;
        }
        Ok(())
    }
}

/// Async optional matching with the same semantics as
/// [`Optionally`](crate::optionally::Optionally)
pub struct AsyncOptionally<P> {
    parser: P,
}

/// Convenience function to create an AsyncOptionally parser
pub fn async_optionally<P>(parser: P) -> AsyncOptionally<P> {
    AsyncOptionally { parser }
}

impl<'src, P> AsyncParser<'src> for AsyncOptionally<P>
where
    P: AsyncParser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    async fn parse(&self, cursor: Self::Cursor) -> AsyncParsed<'src, Self> {
        match self.parser.parse(cursor).await {
            Ok((output, next)) => Ok((Some(output), next)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

impl<'src, P> AsyncPrinter<'src> for AsyncOptionally<P>
where
    P: AsyncPrinter<'src>,
{
    async fn print(
        &self,
        output: &Self::Output,
        cursor: &mut PrintCursor<AsyncElementOf<'src, Self>>,
    ) -> Result<(), PrintError> {
        match output {
            Some(inner) => self.parser.print(inner, cursor).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::int::int;
    use crate::literal::literal;
    use std::task::{Context, Poll, Waker};

    /// Poll a future that is expected to complete without suspending
    fn run<F: Future>(future: F) -> F::Output {
        let mut future = Box::pin(future);
        let mut context = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut context) {
            Poll::Ready(value) => value,
            Poll::Pending => panic!("future did not complete synchronously"),
        }
    }

    #[test]
    fn test_synced_lift() {
        let parser = synced(int::<i64>());
        let (value, _) = run(parser.parse(ByteCursor::new(b"42"))).unwrap();
        assert_eq!(value, 42);

        let mut cursor = PrintCursor::new();
        run(parser.print(&42, &mut cursor)).unwrap();
        assert_eq!(cursor.into_vec(), b"42".to_vec());
    }

    #[test]
    fn test_async_leaf() {
        let parser: AsyncLeaf<ByteCursor, bool> = AsyncLeaf::new(|cursor: ByteCursor| {
            Box::pin(async move {
                let ((), cursor) = literal("ok").parse(cursor)?;
                Ok((true, cursor))
            }) as BoxFuture<'_, _>
        });

        let (value, _) = run(parser.parse(ByteCursor::new(b"ok"))).unwrap();
        assert!(value);
    }

    #[test]
    fn test_async_then_sequences() {
        let parser = async_then(synced(int::<i64>()), synced(literal(":")));
        let ((value, ()), rest) = run(parser.parse(ByteCursor::new(b"5:"))).unwrap();
        assert_eq!(value, 5);
        assert!(rest.eos());
    }

    #[test]
    fn test_async_or_falls_through() {
        let parser = async_or(synced(literal("a")), synced(literal("b")));
        assert!(run(parser.parse(ByteCursor::new(b"b"))).is_ok());
        assert!(run(parser.parse(ByteCursor::new(b"c"))).is_err());
    }

    #[test]
    fn test_async_many_collects() {
        let parser = async_many(synced(literal("ab")));
        let (outputs, rest) = run(parser.parse(ByteCursor::new(b"ababX"))).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(rest.position(), 4);
    }

    #[test]
    fn test_async_optionally() {
        let parser = async_optionally(synced(literal("x")));
        let (output, _) = run(parser.parse(ByteCursor::new(b"y"))).unwrap();
        assert_eq!(output, None);
    }

    #[test]
    fn test_async_lazy_defers_like_sync_lazy() {
        let parser = crate::lazy::lazy(|| synced(literal("go")));
        let ((), rest) = run(parser.parse(ByteCursor::new(b"go"))).unwrap();
        assert!(rest.eos());
    }

    #[test]
    fn test_async_round_trip() {
        let parser = async_many(async_then(synced(int::<i64>()), synced(literal(";"))));
        let outputs = vec![(1, ()), (2, ()), (3, ())];

        let mut cursor = PrintCursor::new();
        run(parser.print(&outputs, &mut cursor)).unwrap();
        let printed = cursor.into_vec();
        assert_eq!(printed, b"1;2;3;".to_vec());

        let (reparsed, _) = run(parser.parse(ByteCursor::new(&printed))).unwrap();
        assert_eq!(reparsed, outputs);
    }
}
