//! # Table Rendering
//!
//! Pure formatting of catalog, cart and order listings.
//!
//! Every function here returns a `String` and performs no I/O: rendering is
//! kept separate from prompting so the app loop owns all terminal
//! interaction and the tables can be asserted on directly in tests.

use bodega_core::{Cart, Catalog, Order};

/// Header + rule for listings without a quantity column.
const PRODUCT_HEADER: &str =
    "Product ID     Name                Price     Description\n\
     ------------------------------------------------------\n";

/// Header + rule for listings with a quantity column.
const LINE_HEADER: &str =
    "Product ID     Name                Price     Quantity       Description\n\
     ------------------------------------------------------------------\n";

/// Renders the catalog as a fixed-width table.
pub fn products_table(catalog: &Catalog) -> String {
    let mut out = String::from("\nAvailable Products:\n");
    out.push_str(PRODUCT_HEADER);
    for product in catalog.products() {
        out.push_str(&format!(
            "{:<15}{:<20}{:<10}{}\n",
            product.id,
            product.name,
            product.price().to_string(),
            product.description,
        ));
    }
    out
}

/// Renders the cart lines and total.
///
/// The caller is expected to have checked for an empty cart first; an empty
/// cart renders as a bare table with a zero total.
pub fn cart_table(cart: &Cart) -> String {
    let mut out = String::from("\nShopping Cart:\n");
    out.push_str(LINE_HEADER);
    for line in cart.lines() {
        out.push_str(&format!(
            "{:<15}{:<20}{:<10}{:<15}{}\n",
            line.product_id,
            line.name,
            line.unit_price().to_string(),
            line.quantity,
            line.description,
        ));
    }
    out.push_str(&format!("Total: {}\n", cart.total()));
    out
}

/// Renders one order: id, stored total, and the line details.
pub fn order_details(order: &Order) -> String {
    let mut out = format!(
        "\nOrder ID: {}\nTotal Amount: {}\nOrder Details:\n",
        order.id,
        order.total()
    );
    out.push_str(LINE_HEADER);
    for line in &order.lines {
        out.push_str(&format!(
            "{:<15}{:<20}{:<10}{:<15}{}\n",
            line.product_id,
            line.name,
            line.unit_price().to_string(),
            line.quantity,
            line.description,
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
