//! Output plumbing shared by the commands
//!
//! Command output goes either straight to stdout or, when stdout is an
//! interactive terminal and paging was not disabled, into a `minus` pager that
//! is shown once the command has finished.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Setting this variable (to anything) disables the pager.
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the `minus` pager to `std::io::Write`.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "@@ -1,3 +1,3 @@")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command writes, plus the pager to show afterwards, if any.
pub struct Output {
    pub writer: Box<dyn Write>,
    pub pager: Option<Pager>,
}

impl Output {
    pub fn select(no_pager: bool) -> Self {
        let paging_disabled = no_pager || std::env::var_os(NO_PAGER_ENV).is_some();
        if paging_disabled || !io::stdout().is_terminal() {
            return Output {
                writer: Box::new(io::stdout()),
                pager: None,
            };
        }

        let pager = Pager::new();
        Output {
            writer: Box::new(PagerWriter::new(pager.clone())),
            pager: Some(pager),
        }
    }

    /// Shows the pager, if one was selected.
    pub fn finish(pager: Option<Pager>) -> anyhow::Result<()> {
        if let Some(pager) = pager {
            minus::page_all(pager)?;
        }
        Ok(())
    }
}
