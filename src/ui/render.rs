use ratatui::Frame;

use prodtable::view::Surface;

use super::{layout, legend, notice, pagination, search, status_bar, table};
use crate::App;

/// Main render function - paints every visible surface of the view buffer
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = app.controller.model();
    let view = &app.view;
    let ready = app.controller.is_ready();

    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        ready,
        model.ui.search_mode,
        !model.table.search_term.is_empty(),
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    let search_bar = search::SearchBar {
        raw_term: &model.table.search_term,
        editing: model.ui.search_mode,
        counts: ready.then_some((
            model.catalog.filtered_products.len(),
            model.catalog.all_products.len(),
        )),
        focus_key: if model.ui.vim_mode { "/" } else { "^F" },
    };
    search::render_search_bar(f, layout_info.search_area, &search_bar);

    if view.is_visible(Surface::Table) {
        table::render_product_table(
            f,
            layout_info.content_area,
            view,
            model.table.sort_mode.as_str(),
        );
    }

    if view.is_visible(Surface::Loading) {
        notice::render_loading(f, layout_info.content_area, &app.endpoint);
    }

    if view.is_visible(Surface::Error) {
        notice::render_error(f, layout_info.content_area, &view.error_message);
    }

    if view.is_visible(Surface::Pagination) {
        pagination::render_pagination(f, layout_info.pagination_area, &view.pagination);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        ready,
        model.ui.search_mode,
        !model.table.search_term.is_empty(),
    );

    let status_line = status_bar::build_status_line(
        model.catalog.filtered_products.len(),
        model.catalog.all_products.len(),
        model.table.sort_mode.as_str(),
        model.table.page_size,
        &model.table.page_size_options,
    );
    status_bar::render_status_bar(f, layout_info.status_area, &status_line);
}
