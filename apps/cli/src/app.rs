//! # App Loop
//!
//! The interactive menu state machine.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Menu Loop                                │
//! │                                                                 │
//! │  Menu:                                                          │
//! │  1. View Products  ──► list catalog ──► pick id ──► quantity    │
//! │  2. View Shopping Cart ──► list lines ──► checkout? (y/n)       │
//! │  3. View Orders    ──► list every placed order                  │
//! │  4. Exit           ──► "Exiting program..."                     │
//! │                                                                 │
//! │  Anything else at the menu prompt re-prompts; EOF anywhere      │
//! │  ends the loop cleanly.                                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The app is generic over its reader and writer so the whole loop runs
//! against in-memory buffers in tests. Core errors never propagate out of
//! here: each one is printed as a user-facing message.

use std::io::{self, BufRead, Write};

use bodega_core::{Catalog, CoreError, Session};
use tracing::{debug, info};

use crate::input::TokenReader;
use crate::render;

/// Whether the loop should keep going after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive console application.
///
/// Owns the catalog, the session and both ends of the terminal.
pub struct App<R, W> {
    tokens: TokenReader<R>,
    out: W,
    catalog: Catalog,
    session: Session,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an app over a catalog and a reader/writer pair.
    pub fn new(catalog: Catalog, reader: R, out: W) -> Self {
        App {
            tokens: TokenReader::new(reader),
            out,
            catalog,
            session: Session::new(),
        }
    }

    /// Returns the session (for inspection in tests).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the menu loop until Exit or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.out,
                "\nMenu:\n1. View Products\n2. View Shopping Cart\n3. View Orders\n4. Exit"
            )?;

            let Some(choice) = self.read_menu_choice()? else {
                break;
            };
            debug!(choice, "menu selection");

            let flow = match choice {
                1 => self.view_products()?,
                2 => self.view_cart()?,
                3 => {
                    self.view_orders()?;
                    Flow::Continue
                }
                _ => {
                    writeln!(self.out, "Exiting program...")?;
                    Flow::Quit
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Prompts until the user enters a single digit 1-4.
    ///
    /// `Ok(None)` means the input ran out.
    fn read_menu_choice(&mut self) -> io::Result<Option<u8>> {
        loop {
            write!(self.out, "Enter your choice (1-4): ")?;
            self.out.flush()?;

            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };

            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ '1'..='4'), None) => return Ok(Some(c as u8 - b'0')),
                _ => writeln!(
                    self.out,
                    "Invalid input! Please enter a number between 1 and 4."
                )?,
            }
        }
    }

    /// Option 1: list the catalog, then offer to add a product to the cart.
    fn view_products(&mut self) -> io::Result<Flow> {
        write!(self.out, "{}", render::products_table(&self.catalog))?;

        write!(
            self.out,
            "\nEnter Product ID to add to cart (or type '0' to cancel): "
        )?;
        self.out.flush()?;
        let Some(product_id) = self.tokens.next_token()? else {
            return Ok(Flow::Quit);
        };
        if product_id == "0" {
            return Ok(Flow::Continue);
        }

        // Unknown ids are reported, not silently ignored
        let Some(product) = self.catalog.find(&product_id).cloned() else {
            writeln!(
                self.out,
                "{}",
                CoreError::ProductNotFound(product_id)
            )?;
            return Ok(Flow::Continue);
        };

        write!(self.out, "Enter quantity: ")?;
        self.out.flush()?;
        let Some(quantity_token) = self.tokens.next_token()? else {
            return Ok(Flow::Quit);
        };
        let Ok(quantity) = quantity_token.parse::<i64>() else {
            writeln!(self.out, "Invalid input! Quantity must be a whole number.")?;
            return Ok(Flow::Continue);
        };

        match self.session.add_to_cart(&product, quantity) {
            Ok(()) => {
                debug!(product_id = %product.id, quantity, "added to cart");
                writeln!(self.out, "Product added successfully!")?;
            }
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    /// Option 2: show the cart, then offer to check out.
    fn view_cart(&mut self) -> io::Result<Flow> {
        if self.session.cart().is_empty() {
            writeln!(self.out, "Shopping cart is empty.")?;
            return Ok(Flow::Continue);
        }

        write!(self.out, "{}", render::cart_table(self.session.cart()))?;

        write!(self.out, "\nDo you want to checkout? (y/n): ")?;
        self.out.flush()?;
        let Some(answer) = self.tokens.next_token()? else {
            return Ok(Flow::Quit);
        };
        if answer == "y" || answer == "Y" {
            self.checkout()?;
        }
        Ok(Flow::Continue)
    }

    /// Runs checkout and reports the outcome as a console message.
    fn checkout(&mut self) -> io::Result<()> {
        match self.session.checkout() {
            Ok(order) => {
                info!(order_id = order.id, total = order.total_cents, "order placed");
                writeln!(self.out, "Checkout successful! Order placed.")?;
            }
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(())
    }

    /// Option 3: list the order history.
    fn view_orders(&mut self) -> io::Result<()> {
        if self.session.orders().is_empty() {
            writeln!(self.out, "No orders placed yet.")?;
            return Ok(());
        }

        for order in self.session.orders() {
            write!(self.out, "{}", render::order_details(order))?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
