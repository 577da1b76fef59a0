use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{Product, SortKey};
use crate::config::DisplayConfig;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogViewState};
use crate::ui::mvi::Reducer;

#[derive(Debug, Parser)]
#[command(name = "catalog-view", version, about = "Browse the product catalog in the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/catalog-view/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Initial search text, matched against product names
    #[arg(long, short = 's', value_name = "TEXT", default_value = "", global = true)]
    pub search: String,

    /// Initial sort field
    #[arg(long, value_enum, global = true)]
    pub sort: Option<SortArg>,

    /// Sort descending instead of ascending (requires --sort)
    #[arg(long, global = true)]
    pub reversed: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the matching products and exit
    List {
        /// Emit a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Price,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => SortKey::Price,
        }
    }
}

impl Cli {
    /// Starting view state, reached through the same intents the
    /// interactive view uses.
    pub fn initial_state(&self) -> CatalogViewState {
        let mut state = CatalogViewState::default();
        if !self.search.is_empty() {
            let intent = CatalogIntent::SearchChanged(self.search.clone());
            state = CatalogReducer::reduce(state, intent);
        }
        if let Some(sort) = self.sort {
            let field = SortKey::from(sort);
            state = CatalogReducer::reduce(state, CatalogIntent::ToggleSort(field));
            if self.reversed {
                state = CatalogReducer::reduce(state, CatalogIntent::ToggleSort(field));
            }
        }
        state
    }
}

/// Plain-text listing: one product per line, or the empty placeholder.
pub fn render_listing(products: &[Product], display: &DisplayConfig) -> String {
    if products.is_empty() {
        return format!("{}\n", crate::ui::render::NOTHING_FOUND);
    }

    let name_width = products
        .iter()
        .map(|product| product.name.chars().count())
        .max()
        .unwrap_or(0);
    let prices: Vec<String> = products
        .iter()
        .map(|product| display.format_price(product.price))
        .collect();
    let price_width = prices.iter().map(|p| p.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (product, price) in products.iter().zip(&prices) {
        out.push_str(&format!(
            "{:<name_width$}  {:>price_width$}  {}\n",
            product.name,
            price,
            product.labels.join(", "),
        ));
    }
    out
}

pub fn render_json(products: &[Product]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}
