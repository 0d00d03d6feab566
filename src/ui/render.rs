use crate::App;
use ratatui::Frame;

use super::{
    dialogs, file_table, layout, legend, search, server_bar, status_bar, toast, upload_panel,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;

    let legend_state = legend::LegendState {
        vim_mode: model.ui.vim_mode,
        prompt_open: model.ui.path_prompt.is_some(),
        search_mode: model.ui.search_mode,
        has_search_query: !model.ui.search_query.is_empty(),
        can_submit: model.upload.can_submit(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_state);
    let search_visible = model.ui.search_mode || !model.ui.search_query.is_empty();
    let layout_info = layout::calculate_layout(size, legend_height, search_visible);

    server_bar::render_server_bar(
        f,
        layout_info.server_area,
        app.base_url(),
        &model.listing.connection_state,
        model.server_info.as_ref(),
    );

    upload_panel::render_upload_panel(f, layout_info.upload_area, &model.upload);

    let files = &model.listing.files;
    let rows: Vec<_> = model
        .visible_indices()
        .into_iter()
        .filter_map(|idx| files.get(idx))
        .collect();

    file_table::render_file_listing(
        f,
        layout_info.files_area,
        &rows,
        files.len(),
        model.ui.selected_index,
        model.ui.view_mode,
        &model.listing.connection_state,
    );

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            &model.ui.search_query,
            model.ui.search_mode,
            rows.len(),
            model.ui.vim_mode,
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_state);

    let download_url = app.selected_download_url();
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &model.listing.connection_state,
        files.len(),
        download_url.as_deref(),
    );

    // Overlays last so they sit on top
    if let Some(prompt) = &model.ui.path_prompt {
        dialogs::render_path_prompt(f, &prompt.input);
    }

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
