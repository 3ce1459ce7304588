mod include_modification_times_in_headers;
mod show_hunks_with_default_context;
mod show_hunks_with_one_line_of_context;
mod use_the_shortest_edit_script_with_myers;
