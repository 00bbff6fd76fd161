mod state_file;
