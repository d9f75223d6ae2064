use sd_town::SessionConfig;

pub fn run(config: SessionConfig, number: usize) -> Result<(), String> {
    super::run_command(config, &format!("equip {number}"))
}
