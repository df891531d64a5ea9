use crate::core::config;

/// Print the default config file template to stdout
pub fn execute() {
    for line in config::generate_template() {
        println!("{}", line);
    }
}
