mod image_sorter_tests;
