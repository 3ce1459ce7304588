mod show_changed_blocks_side_by_side;
