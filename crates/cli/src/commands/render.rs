//! Plain-text rendering of storefront views.

#![allow(clippy::print_stdout)]

use polymart_storefront::views::{CartView, EMPTY_CART_MESSAGE, ProductCardView};

pub fn product_list(cards: &[ProductCardView]) {
    for card in cards {
        println!("[{}] {} - {}", card.id, card.name, card.price);
        println!("    {}", card.image);
    }
}

pub fn cart_panel(cart: &CartView) {
    println!("Cart ({})", cart.item_count);
    if cart.is_empty() {
        println!("  {EMPTY_CART_MESSAGE}");
    }
    for item in &cart.items {
        println!("  [{}] {}  {}  = {}", item.id, item.name, item.price_line, item.line_price);
    }
    println!("Total: {}", cart.subtotal);
}
