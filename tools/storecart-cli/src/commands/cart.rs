//! Cart commands.

use anyhow::Result;
use storecart_core::{Cart, ProductId};
use storecart_store::{CartStore, UpdateProductAmount};

use super::{AddArgs, RemoveArgs, StepArgs, UpdateArgs};
use crate::context::Context;
use crate::output::{truncate, Output};

const TITLE_WIDTH: usize = 40;
const WIDTHS: [usize; 5] = [6, TITLE_WIDTH, 6, 12, 12];

/// Run the show command.
pub async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    render(&store.cart().await, &ctx.output);
    Ok(())
}

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    store.add_product(ProductId::new(args.product_id)).await;
    finish(&store, ctx).await
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    store.remove_product(ProductId::new(args.product_id)).await;
    finish(&store, ctx).await
}

/// Run the update command.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    store
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId::new(args.product_id),
            amount: args.amount,
        })
        .await;
    finish(&store, ctx).await
}

/// Run the increment command: current amount + 1.
pub async fn increment(args: StepArgs, ctx: &Context) -> Result<()> {
    step(args, 1, ctx).await
}

/// Run the decrement command: current amount - 1, never below 1.
pub async fn decrement(args: StepArgs, ctx: &Context) -> Result<()> {
    step(args, -1, ctx).await
}

async fn step(args: StepArgs, delta: i64, ctx: &Context) -> Result<()> {
    let store = ctx.cart_store()?;
    let product_id = ProductId::new(args.product_id);
    let amount = store.cart().await.amount_of(product_id) + delta;
    store
        .update_product_amount(UpdateProductAmount { product_id, amount })
        .await;
    finish(&store, ctx).await
}

async fn finish(store: &CartStore, ctx: &Context) -> Result<()> {
    render(&store.cart().await, &ctx.output);
    Ok(())
}

/// Print the cart as a table, or as JSON in JSON mode.
pub fn render(cart: &Cart, output: &Output) {
    if output.is_json() {
        output.json(cart);
        return;
    }

    output.header("Cart");
    if cart.is_empty() {
        output.info("Cart is empty");
        return;
    }

    output.table_row(&["ID", "Product", "Qty", "Price", "Subtotal"], &WIDTHS);
    for item in cart.items() {
        let subtotal = item
            .subtotal()
            .map(|m| m.display())
            .unwrap_or_else(|_| "overflow".to_string());
        output.table_row(
            &[
                &item.product_id().to_string(),
                &truncate(&item.product.title, TITLE_WIDTH),
                &item.amount.to_string(),
                &item.product.price.display(),
                &subtotal,
            ],
            &WIDTHS,
        );
    }

    println!();
    output.kv("items", &cart.item_count().to_string());
    match cart.subtotal() {
        Ok(total) => output.kv("total", &total.display()),
        Err(e) => output.error(&format!("Cannot total cart: {e}")),
    }
}
