mod convert_command_tests;
