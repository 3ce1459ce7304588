mod print_similarity_and_its_upper_bounds;
