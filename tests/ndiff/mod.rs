mod color_delta_lines_when_forced;
mod fail_for_a_missing_file;
mod mark_changed_characters_of_similar_lines;
mod resynchronize_when_blank_lines_are_ignored;
mod resynchronize_when_matching_lines_are_ignored;
