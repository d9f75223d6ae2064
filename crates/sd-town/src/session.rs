//! Town session management.
//!
//! `TownSession` owns the character, the shop, the dungeon catalog and the
//! random generator. It exposes typed operations for callers that render
//! their own output, and a line-based command interpreter for the
//! interactive loop.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use sd_core::{Character, EquipChange, Item};
use sd_mechanics::{EncounterCatalog, EncounterResult, attack_bonus, defense_bonus, resolve};

use crate::config::SessionConfig;
use crate::error::{TownError, TownResult};
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::rest::rest;
use crate::save;
use crate::shop::{Sale, Shop};

/// An interactive play session in town.
pub struct TownSession {
    character: Character,
    shop: Shop,
    catalog: EncounterCatalog,
    journal: Journal,
    config: SessionConfig,
    rng: StdRng,
}

impl TownSession {
    /// Start a session around an existing character.
    pub fn new(character: Character, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut shop = Shop::default();
        shop.sync_with(&character.inventory);
        debug!(name = %character.name, seed = ?config.seed, "session started");

        Self {
            character,
            shop,
            catalog: EncounterCatalog::default(),
            journal: Journal::new(),
            config,
            rng,
        }
    }

    /// Start a session from the save file named in `config`.
    pub fn load(config: SessionConfig) -> TownResult<Self> {
        let character = save::load(&config.save_path)?;
        Ok(Self::new(character, config))
    }

    /// Get the character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Get the shop.
    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Get the dungeon catalog.
    pub fn catalog(&self) -> &EncounterCatalog {
        &self.catalog
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Write the character to the configured save file.
    pub fn save(&self) -> TownResult<()> {
        save::save(&self.character, &self.config.save_path)
    }

    /// Attempt the dungeon tier at `tier_index` (0-based).
    pub fn enter_dungeon(&mut self, tier_index: usize) -> TownResult<EncounterResult> {
        let result = resolve(
            &mut self.character,
            &self.catalog,
            tier_index,
            &mut self.rng,
        )?;
        self.journal.append(JournalEntry::Dungeon {
            tier: result.tier_name.clone(),
            cleared: result.cleared,
            damage: result.damage,
            health_after: result.health_after,
            gold_gained: result.gold_gained,
            new_levels: result.level_ups.iter().map(|l| l.to).collect(),
            timestamp: Utc::now(),
        });
        Ok(result)
    }

    /// Buy the shop entry at `index` (0-based).
    pub fn buy(&mut self, index: usize) -> TownResult<Item> {
        let item = self.shop.buy(&mut self.character, index)?.clone();
        self.journal.append(JournalEntry::Purchase {
            item: item.name.clone(),
            price: item.price,
            timestamp: Utc::now(),
        });
        Ok(item)
    }

    /// Sell the inventory item at `index` (0-based).
    pub fn sell(&mut self, index: usize) -> TownResult<Sale> {
        let sale = self
            .shop
            .sell(&mut self.character, index, self.config.sell_rate)?;
        self.journal.append(JournalEntry::Sale {
            item: sale.name.clone(),
            refund: sale.refund,
            timestamp: Utc::now(),
        });
        Ok(sale)
    }

    /// Equip or unequip the inventory item at `index` (0-based).
    pub fn toggle_equip(&mut self, index: usize) -> TownResult<EquipChange> {
        let change = self.character.inventory.toggle_equip(index)?;
        self.journal.append(JournalEntry::Equipment {
            change: describe_equip(&change),
            timestamp: Utc::now(),
        });
        Ok(change)
    }

    /// Rest at the inn. Returns the health before resting.
    pub fn rest(&mut self) -> TownResult<f64> {
        let cost = self.config.rest_cost;
        let health_before = rest(&mut self.character, cost)?;
        self.journal.append(JournalEntry::Rest {
            cost,
            health_before,
            timestamp: Utc::now(),
        });
        Ok(health_before)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> TownResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "status" | "stats" => Ok(self.render_status()),
            "inventory" | "inv" => Ok(self.render_inventory()),
            "equip" => self.do_equip(rest),
            "shop" => Ok(self.render_shop()),
            "buy" => self.do_buy(rest),
            "sell" => self.do_sell(rest),
            "rest" => self.do_rest(),
            "dungeon" if rest.is_empty() => Ok(self.render_dungeons()),
            "dungeon" => self.do_dungeon(rest),
            "journal" => Ok(self.render_journal()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(TownError::InvalidChoice(format!(
                "unknown command '{other}', type 'help'"
            ))),
        }
    }

    fn do_equip(&mut self, arg: &str) -> TownResult<String> {
        let index = parse_position(arg, "usage: equip <number>")?;
        let change = self.toggle_equip(index)?;
        Ok(describe_equip(&change))
    }

    fn do_buy(&mut self, arg: &str) -> TownResult<String> {
        let index = parse_position(arg, "usage: buy <number>")?;
        let item = self.buy(index)?;
        Ok(format!(
            "Bought {} for {} G. Gold: {}",
            item.name, item.price, self.character.gold
        ))
    }

    fn do_sell(&mut self, arg: &str) -> TownResult<String> {
        let index = parse_position(arg, "usage: sell <number>")?;
        let sale = self.sell(index)?;
        Ok(format!(
            "Sold {} for {} G. Gold: {}",
            sale.name, sale.refund, self.character.gold
        ))
    }

    fn do_rest(&mut self) -> TownResult<String> {
        let before = self.rest()?;
        Ok(format!(
            "You rest at the inn for {} G.\nHealth: {before} -> {}\nGold: {}",
            self.config.rest_cost, self.character.health, self.character.gold
        ))
    }

    fn do_dungeon(&mut self, arg: &str) -> TownResult<String> {
        let index = parse_position(arg, "usage: dungeon <number>")?;
        let result = self.enter_dungeon(index)?;
        Ok(render_result(&result))
    }

    /// The character sheet as text.
    pub fn render_status(&self) -> String {
        let c = &self.character;
        let atk_bonus = attack_bonus(c);
        let def_bonus = defense_bonus(c);
        let bonus = |b: f64| {
            if b > 0.0 {
                format!(" (+{b})")
            } else {
                String::new()
            }
        };

        let mut out = format!("Lv. {:02}\n{} ({})\n", c.level, c.name, c.job);
        out.push_str(&format!(
            "Attack : {}{}\n",
            c.base_attack + atk_bonus,
            bonus(atk_bonus)
        ));
        out.push_str(&format!(
            "Defense: {}{}\n",
            c.base_defense + def_bonus,
            bonus(def_bonus)
        ));
        out.push_str(&format!("Health : {}\n", c.health));
        out.push_str(&format!("Gold   : {}", c.gold));
        out
    }

    /// The inventory as a numbered list.
    pub fn render_inventory(&self) -> String {
        let items = self.character.inventory.items();
        if items.is_empty() {
            return "Inventory is empty.".to_string();
        }
        let mut out = format!("Inventory ({}):\n", items.len());
        for (i, item) in items.iter().enumerate() {
            let tag = if item.equipped { "[E]" } else { "" };
            out.push_str(&format!(
                "  {}. {tag}{} | {} | {}\n",
                i + 1,
                item.name,
                item.stat_label(),
                item.description
            ));
        }
        out.trim_end().to_string()
    }

    /// The shop stock as a numbered list.
    pub fn render_shop(&self) -> String {
        let mut out = format!("Shop [Gold: {}]\n", self.character.gold);
        for (i, item) in self.shop.stock().iter().enumerate() {
            let status = if item.purchased {
                "Purchased".to_string()
            } else {
                format!("{} G", item.price)
            };
            out.push_str(&format!(
                "  {}. {} | {} | {status}\n",
                i + 1,
                item.name,
                item.stat_label()
            ));
        }
        out.trim_end().to_string()
    }

    /// The dungeon tiers as a numbered list.
    pub fn render_dungeons(&self) -> String {
        let mut out = String::from("Dungeons:\n");
        for (i, tier) in self.catalog.tiers().iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} | defense {}+ recommended\n",
                i + 1,
                tier.name,
                tier.recommended_defense
            ));
        }
        out.trim_end().to_string()
    }

    fn render_journal(&self) -> String {
        if self.journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        let (runs, clears) = self.journal.dungeon_tally();
        let mut out = self.journal.export_text();
        out.push_str(&format!("\nDungeon runs: {runs} ({clears} cleared)"));
        out
    }
}

/// Render an encounter outcome.
pub fn render_result(result: &EncounterResult) -> String {
    let mut out = if result.cleared {
        String::from("Dungeon cleared! Congratulations!\n")
    } else {
        String::from("Dungeon failed... Better luck next time.\n")
    };
    out.push_str(&format!("[{} results]\n", result.tier_name));
    out.push_str(&format!(
        "Health: {} -> {}\n",
        result.health_before, result.health_after
    ));
    out.push_str(&format!(
        "Gold: {} -> {}",
        result.gold_before, result.gold_after
    ));
    for level_up in &result.level_ups {
        out.push_str(&format!(
            "\nLevel up! Lv. {} -> Lv. {}",
            level_up.from, level_up.to
        ));
    }
    out
}

fn describe_equip(change: &EquipChange) -> String {
    match change {
        EquipChange::Equipped {
            name,
            replaced: Some(old),
        } => format!("Unequipped {old}. Equipped {name}."),
        EquipChange::Equipped {
            name,
            replaced: None,
        } => format!("Equipped {name}."),
        EquipChange::Unequipped { name } => format!("Unequipped {name}."),
    }
}

/// Parse a 1-based list position into a 0-based index.
fn parse_position(arg: &str, usage: &str) -> TownResult<usize> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(TownError::InvalidChoice(usage.to_string())),
    }
}

/// Whether a line of input is the `quit` command, judged by its first word
/// the same way [`TownSession::process`] dispatches.
pub fn is_quit_command(input: &str) -> bool {
    input
        .split_whitespace()
        .next()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q"))
}

const HELP: &str = "\
Town Commands:
  status                 Show your character
  inventory              List owned items
  equip <n>              Equip or unequip inventory item n
  shop                   List the shop's stock
  buy <n>                Buy shop item n
  sell <n>               Sell inventory item n
  rest                   Rest at the inn (restores health)
  dungeon                List dungeons
  dungeon <n>            Enter dungeon n
  journal                Show this session's journal
  help                   Show this help
  quit                   Exit";
