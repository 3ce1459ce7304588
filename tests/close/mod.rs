mod list_the_closest_candidates_first;
mod reject_a_cutoff_outside_the_unit_interval;
