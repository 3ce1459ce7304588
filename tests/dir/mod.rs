mod compare_trees_holding_binary_files;
mod list_every_file_of_a_new_tree_as_added;
mod reject_an_unknown_diff_filter;
mod report_added_deleted_and_modified_files;
mod show_only_filtered_changes;
