//! Line-oriented command shell over a menu catalog.
//!
//! The shell owns the catalog for its lifetime and maps each input line onto
//! a catalog operation: `list`, `filter`, or validate-then-append for `add`.
//! Validation failures are reported to the user and never abort the loop.

use std::io::{self, BufRead, Write};

use menu_catalog::{Catalog, ItemIdGenerator, PricePolicy, filter, validate};
use tracing::{info, warn};

use crate::error::AppError;

mod command;
mod render;

pub use command::Command;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// A shell session owning its catalog.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    ids: ItemIdGenerator,
    policy: PricePolicy,
}

impl Session {
    /// Start a session over `catalog`.
    ///
    /// Ids already held by `catalog` are marked as taken in `ids`.
    #[must_use]
    pub fn new(mut catalog: Catalog, ids: ItemIdGenerator, policy: PricePolicy) -> Self {
        for item in catalog.list() {
            ids.observe(item.id());
        }
        catalog.subscribe(|item| {
            info!(
                item_id = %item.id(),
                course = %item.course(),
                "catalog changed; refreshing views"
            );
        });
        Self {
            catalog,
            ids,
            policy,
        }
    }

    /// The catalog held by this session.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run `command`, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to `out` fails.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Help => render::write_help(out)?,
            Command::List => render::write_home(out, self.catalog.list())?,
            Command::Courses => render::write_courses(out)?,
            Command::Filter(selected) => {
                let view = filter(self.catalog.list(), selected);
                render::write_filtered(out, selected, &view)?;
            }
            Command::Add(fields) => match validate(&fields, self.policy, &self.ids) {
                Ok(item) => {
                    writeln!(out, "Added {} ({})", item.name(), item.id())?;
                    self.catalog.append(item);
                    writeln!(out, "Total Items: {}", self.catalog.len())?;
                }
                Err(error) => {
                    warn!(%error, "menu item rejected");
                    writeln!(out, "Validation error: {error}")?;
                }
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    ///
    /// Lines that fail to parse, or are not valid UTF-8, are reported on
    /// `out` and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if reading input or writing output fails.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use menu_app::shell::Session;
    /// use menu_catalog::{Catalog, ItemIdGenerator, PricePolicy, default_menu};
    /// use mockable::DefaultClock;
    ///
    /// let mut session = Session::new(
    ///     Catalog::from_items(default_menu()),
    ///     ItemIdGenerator::new(Arc::new(DefaultClock)),
    ///     PricePolicy::NonNegative,
    /// );
    /// let mut out = Vec::new();
    /// session
    ///     .run("filter dessert\n".as_bytes(), &mut out)
    ///     .expect("session runs");
    ///
    /// let text = String::from_utf8(out).expect("utf-8");
    /// assert!(text.starts_with("Results: 1 (Dessert)"));
    /// ```
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<(), AppError> {
        for line in input.lines() {
            let text = match line {
                Ok(text) => text,
                Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                    warn!(%error, "unreadable command line");
                    writeln!(out, "Error: {error}")?;
                    out.flush()?;
                    continue;
                }
                Err(error) => return Err(error.into()),
            };
            match Command::parse(&text) {
                Ok(Some(command)) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(%error, line = %text, "command rejected");
                    writeln!(out, "Error: {error}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}
