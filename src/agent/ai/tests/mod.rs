mod move_ordering_tests;
