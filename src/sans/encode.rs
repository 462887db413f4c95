//! Driver feeding bytes through an encoding strategy.

use core::fmt::{self, Write};

use super::strategy::EncodeStrategy;

/// Encode a sequence of bytes, writing text to `out`.
///
/// Errors from the source are returned unchanged; formatting errors are
/// converted into `E`. Returns the number of bytes encoded.
pub fn run<S, E>(
    bytes: impl IntoIterator<Item = Result<u8, E>>,
    strategy: &mut S,
    out: &mut dyn Write,
) -> Result<u64, E>
where
    S: EncodeStrategy + ?Sized,
    E: From<fmt::Error>,
{
    strategy.start(out)?;

    let mut count = 0;

    for b in bytes {
        strategy.next(b?, count, out)?;
        count += 1;
    }

    strategy.finish(count, out)?;
    log::trace!("encoded {count} bytes");

    Ok(count)
}
