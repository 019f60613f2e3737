fn main() {
    let command_line_interface = ts_notate::cli::CommandLineInterface::load();
    command_line_interface.run();
}
