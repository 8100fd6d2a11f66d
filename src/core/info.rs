use num_derive::FromPrimitive;

/// The categories of static metadata a frontend can query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum InfoType {
    CoreName,
    SystemName,
    Description,
    Version,
    Author,
    Extensions,
    License,
    Website,
    /// Firmware files the core needs, if any.
    Firmware,
}

/// Look up a static metadata string. Pure constant lookup.
pub fn info(info: InfoType) -> &'static str {
    match info {
        InfoType::CoreName => "SkyEmu",
        InfoType::SystemName => "Gameboy Color, Gameboy Advance, Nintendo DS",
        InfoType::Description => {
            "Game Boy Advance, Game Boy, Game Boy Color, and Nintendo DS Emulator"
        }
        InfoType::Version => "4.0",
        InfoType::Author => "Sky",
        InfoType::Extensions => "gb,gbc,gba,nds",
        InfoType::License => "MIT",
        InfoType::Website => "https://skyemu.app",
        InfoType::Firmware => "",
    }
}
