//! The interactive order-entry loop.
//!
//! [`OrderCollector`] walks a small state machine:
//!
//! ```text
//! ShowMenu -> AwaitSelection -> AwaitQuantity -> AwaitContinue -> Done
//!    ^              |                 |               |
//!    +-- error -----+---- error ------+------ "y" ----+
//! ```
//!
//! A rejected selection or quantity is reported and the loop goes straight back
//! to the menu; the "order more?" prompt is only asked after a line was accepted.
//! This differs from the original program, which still asked "order more?" after
//! a rejected quantity. End of input at any prompt ends the session.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::input::{Field, InputError, Validator};
use crate::model::{MenuCatalog, MenuItem, OrderLine};
use crate::terminal::{prompt, read_line, write_line};

/// States of the order-entry loop.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectorState {
    ShowMenu,
    AwaitSelection,
    AwaitQuantity(MenuItem),
    AwaitContinue,
    Done,
}

/// Parses a 1-based menu number and resolves it against the catalog.
pub fn parse_selection<'a>(catalog: &'a MenuCatalog, text: &str) -> Result<&'a MenuItem, InputError> {
    if !Validator::digits().is_match(text) {
        return Err(InputError::Format(Field::Selection));
    }
    let number: usize = text
        .parse()
        .map_err(|_| InputError::Range(Field::Selection))?;
    catalog
        .select(number)
        .ok_or(InputError::Range(Field::Selection))
}

/// Parses a positive quantity.
pub fn parse_quantity(text: &str) -> Result<u32, InputError> {
    if !Validator::digits().is_match(text) {
        return Err(InputError::Format(Field::Quantity));
    }
    match text.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(InputError::Range(Field::Quantity)),
    }
}

/// Drives the menu prompts and hands every accepted line to a dispatcher.
pub struct OrderCollector<'a> {
    catalog: &'a MenuCatalog,
}

impl<'a> OrderCollector<'a> {
    pub fn new(catalog: &'a MenuCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the loop until the user declines to order more or input ends.
    ///
    /// `dispatch` is called once per accepted line, before the continue prompt.
    /// Returns the number of lines dispatched.
    pub async fn run<R, W, D>(
        &self,
        input: &mut R,
        output: &mut W,
        mut dispatch: D,
    ) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        D: FnMut(OrderLine),
    {
        let mut state = CollectorState::ShowMenu;
        let mut dispatched = 0;

        loop {
            debug!(?state, "Collector step");
            state = match state {
                CollectorState::ShowMenu => {
                    self.show_menu(output).await?;
                    CollectorState::AwaitSelection
                }
                CollectorState::AwaitSelection => match read_line(input).await? {
                    None => CollectorState::Done,
                    Some(text) => match parse_selection(self.catalog, &text) {
                        Ok(item) => CollectorState::AwaitQuantity(item.clone()),
                        Err(e) => {
                            report(output, &text, &e).await?;
                            CollectorState::ShowMenu
                        }
                    },
                },
                CollectorState::AwaitQuantity(item) => {
                    prompt(output, &format!("Masukkan jumlah untuk {}: ", item.name)).await?;
                    match read_line(input).await? {
                        None => CollectorState::Done,
                        Some(text) => {
                            match parse_quantity(&text).and_then(|q| OrderLine::new(&item, q)) {
                                Ok(line) => {
                                    info!(item = %line.name, quantity = line.quantity, "Line accepted");
                                    dispatch(line);
                                    dispatched += 1;
                                    CollectorState::AwaitContinue
                                }
                                Err(e) => {
                                    report(output, &text, &e).await?;
                                    CollectorState::ShowMenu
                                }
                            }
                        }
                    }
                }
                CollectorState::AwaitContinue => {
                    prompt(output, "Ingin memesan item lain? (y/n): ").await?;
                    match read_line(input).await? {
                        Some(answer) if answer.eq_ignore_ascii_case("y") => CollectorState::ShowMenu,
                        _ => CollectorState::Done,
                    }
                }
                CollectorState::Done => break,
            };
        }

        info!(dispatched, "Order entry finished");
        Ok(dispatched)
    }

    async fn show_menu<W>(&self, output: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        write_line(output, "Pilih item dari menu dengan memasukkan nomor:").await?;
        for (i, item) in self.catalog.items().iter().enumerate() {
            write_line(output, &format!("{}. {} - Rp.{:.2}", i + 1, item.name, item.unit_price)).await?;
        }
        prompt(output, "Masukkan nomor pilihan: ").await
    }
}

async fn report<W>(output: &mut W, text: &str, error: &InputError) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    warn!(input = text, %error, "Input rejected");
    write_line(output, &format!("Pulih dari kesalahan: {}", error)).await
}
