mod recover_both_inputs_from_a_saved_delta;
mod reject_an_unknown_side;
