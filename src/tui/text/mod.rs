//! Text utilities: line wrapping for plain and styled text.

mod wrap;

pub(crate) use wrap::wrap_spans;

#[cfg(test)]
mod tests;
