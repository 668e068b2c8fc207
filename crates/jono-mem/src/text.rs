use core::{
    fmt,
    str::FromStr,
};

use std::io::{self, BufRead};

use crate::dyn_array::DynArray;

/// Reading can fail in transport, in parsing, or by the stream running
/// dry before every slot was filled.
#[derive(Debug)]
pub enum ReadError<E> {
    Io(io::Error),
    Parse {
        index: usize,
        source: E,
    },
    UnexpectedEnd {
        filled: usize,
        len: usize,
    },
}

impl<E: fmt::Display> fmt::Display for ReadError<E> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => {
                write!(f, "read failed: {}", err)
            },
            Self::Parse { index, source } => {
                write!(f, "parsing element {} failed: {}", index, source)
            },
            Self::UnexpectedEnd { filled, len } => {
                write!(f, "input ended after {} of {} elements", filled, len)
            },
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for ReadError<E> {}

impl<E> From<io::Error> for ReadError<E> {

    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Writes every element followed by a single space, the last one
/// included.
impl<T: fmt::Display> fmt::Display for DynArray<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl<T: FromStr> DynArray<T> {

    /// Parses one whitespace-delimited token per existing slot, in
    /// order, replacing each slot's value. `len` does not change and
    /// the stream is left right after the last consumed token.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError<T::Err>> {
        let len = self.len();
        for (index, slot) in self.as_mut_slice().iter_mut().enumerate() {
            let token = match next_token(reader)? {
                Some(token) => token,
                None => return Err(ReadError::UnexpectedEnd { filled: index, len }),
            };
            match token.parse() {
                Ok(value) => *slot = value,
                Err(source) => return Err(ReadError::Parse { index, source }),
            }
        }
        Ok(())
    }
}

/// Skips leading whitespace, then gathers bytes up to the next
/// whitespace or end of input. `None` when the input is exhausted.
fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None)
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let exhausted = skip == buf.len();
        reader.consume(skip);
        if !exhausted {
            break
        }
    }
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break
        }
        let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&buf[..take]);
        let exhausted = take == buf.len();
        reader.consume(take);
        if !exhausted {
            break
        }
    }
    match String::from_utf8(token) {
        Ok(token) => Ok(Some(token)),
        Err(err) => Err(io::Error::new(io::ErrorKind::InvalidData, err)),
    }
}
