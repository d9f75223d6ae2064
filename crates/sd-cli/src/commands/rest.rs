use sd_town::SessionConfig;

pub fn run(config: SessionConfig) -> Result<(), String> {
    super::run_command(config, "rest")
}
