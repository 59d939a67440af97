use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::parser::Parser;

/// Error from an incremental parse, detached from the transient buffer the
/// failure pointed into
#[derive(Debug, thiserror::Error)]
#[error("stream error: {message}")]
pub struct StreamError {
    message: String,
}

/// Incremental driver feeding arriving chunks through a parser
///
/// Input arrives as chunks from an iterator. Each chunk is appended to an
/// internal buffer, the parser runs once against the buffered input, and the
/// consumed prefix is discarded so unconsumed bytes carry over to the next
/// chunk. One output is produced per chunk.
pub struct Stream<P> {
    parser: P,
}

/// Convenience function to create a Stream driver
pub fn stream<P>(parser: P) -> Stream<P> {
    Stream { parser }
}

impl<P> Stream<P> {
    pub fn parse_stream<T, O, I>(&self, chunks: I) -> Result<Vec<O>, StreamError>
    where
        T: Atomic,
        I: IntoIterator<Item = Vec<T>>,
        P: for<'s> Parser<'s, Cursor = AtomicCursor<'s, T>, Output = O>,
    {
        let mut buffer: Vec<T> = Vec::new();
        let mut outputs = Vec::new();

        for chunk in chunks {
            buffer.extend(chunk);

            // The error borrows the buffer, so it is rendered to an owned
            // message before the buffer can be touched again.
            let consumed = match self.parser.parse(AtomicCursor::new(&buffer)) {
                Ok((output, rest)) => {
                    outputs.push(output);
                    rest.position()
                }
                Err(error) => {
                    return Err(StreamError {
                        message: error.to_string(),
                    });
                }
            };
            buffer.drain(..consumed);
        }

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::int;
    use crate::literal::literal;
    use crate::then::ThenExt;

    #[test]
    fn test_stream_one_output_per_chunk() {
        let parser = stream(int::<i64>().then_skip(literal("\n")));
        let chunks = vec![b"1\n".to_vec(), b"22\n".to_vec(), b"333\n".to_vec()];

        let outputs = parser.parse_stream(chunks).unwrap();
        assert_eq!(outputs, vec![1, 22, 333]);
    }

    #[test]
    fn test_stream_carries_unconsumed_bytes_forward() {
        // The first chunk ends mid-number; the leftover bytes must prefix
        // the second chunk.
        let parser = stream(int::<i64>().then_skip(literal(";")));
        let chunks = vec![b"12;45".to_vec(), b"6;".to_vec()];

        let outputs = parser.parse_stream(chunks).unwrap();
        assert_eq!(outputs, vec![12, 456]);
    }

    #[test]
    fn test_stream_error_carries_message() {
        let parser = stream(int::<i64>().then_skip(literal(";")));
        let chunks = vec![b"oops;".to_vec()];

        let error = parser.parse_stream(chunks).unwrap_err();
        assert!(error.to_string().contains("expected integer"));
    }

    #[test]
    fn test_stream_empty_input() {
        let parser = stream(int::<i64>());
        let outputs = parser.parse_stream(Vec::<Vec<u8>>::new()).unwrap();
        assert!(outputs.is_empty());
    }
}
