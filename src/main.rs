fn main() -> std::process::ExitCode {
    enterprise_data_enhancer::run()
}
