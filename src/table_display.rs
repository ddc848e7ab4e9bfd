use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use employee_directory::data::data_provider::DataProvider;
use employee_directory::ui::table_renderer::EMPTY_MESSAGE;

/// Print the provider's rows as a table on stdout
pub fn display_results(provider: &dyn DataProvider) {
    let row_count = provider.get_row_count();
    if row_count == 0 {
        println!("{}", EMPTY_MESSAGE.yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = provider
        .get_column_names()
        .into_iter()
        .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    for row in provider.get_visible_rows(0, row_count) {
        table.add_row(row);
    }

    println!("{table}");
}
