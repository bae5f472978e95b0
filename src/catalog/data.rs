// Hand-authored catalog entries and seed world state.
//
// Template base prices are written in NP, the way the catalog is authored,
// and converted to the internal scale when the catalog is built.

use crate::models::Rarity::{self, Ancient, Common, Legendary, Mythical, Rare, Uncommon};

pub(super) struct GameEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub(super) struct TemplateEntry {
    pub id: &'static str,
    pub game_id: &'static str,
    pub name: &'static str,
    pub image_seed: &'static str,
    pub rarity: Rarity,
    pub description: &'static str,
    pub base_price_np: i64,
}

/// Name parts and rarity pool for procedural templates of one game
pub(super) struct AssetPool {
    pub game_id: &'static str,
    pub prefixes: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub rarities: &'static [Rarity],
}

pub(super) struct SeedItem {
    pub id: &'static str,
    pub template_id: &'static str,
    pub owner_id: &'static str,
    pub acquired: (i32, u32, u32),
    pub traits: &'static [(&'static str, SeedTrait)],
}

#[derive(Clone, Copy)]
pub(super) enum SeedTrait {
    Text(&'static str),
    Int(i64),
    Bool(bool),
}

pub(super) struct SeedListing {
    pub id: &'static str,
    pub item_instance_id: &'static str,
    pub seller_id: &'static str,
    /// Internal scale, hundredths
    pub price_cents: i64,
    pub listed: (i32, u32, u32),
}

pub(super) struct SeedTrade {
    pub id: &'static str,
    pub item_name: &'static str,
    pub seller_id: &'static str,
    pub price_cents: i64,
    pub date: (i32, u32, u32, u32, u32),
}

/// Every game is padded with generated templates up to this count
pub(super) const TEMPLATES_PER_GAME: usize = 30;

pub(super) const GAMES: &[GameEntry] = &[
    GameEntry {
        id: "g1",
        name: "League of Legends",
        slug: "lol",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/1276790/header.jpg",
        description: "The world's most popular MOBA with a vast collection of champions.",
    },
    GameEntry {
        id: "g2",
        name: "Final Fantasy XIV",
        slug: "ff14",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/39210/header.jpg",
        description: "A critically acclaimed MMORPG with a rich story and immersive world.",
    },
    GameEntry {
        id: "g3",
        name: "Helldivers 2",
        slug: "helldivers2",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/553850/header.jpg",
        description: "Spread managed democracy across the galaxy in this co-op shooter.",
    },
    GameEntry {
        id: "g4",
        name: "Black Desert Online",
        slug: "bdo",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/582660/header.jpg",
        description: "An open-world MMORPG with intense action combat and stunning graphics.",
    },
    GameEntry {
        id: "g5",
        name: "Genshin Impact",
        slug: "genshin",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/1676180/header.jpg",
        description: "An open-world action RPG featuring elemental magic and character switching.",
    },
    GameEntry {
        id: "g6",
        name: "Stellar Drifters",
        slug: "indie1",
        image: "https://cdn.akamai.steamstatic.com/steam/apps/107410/header.jpg",
        description: "A procedurally generated space rogue-lite indie sensation.",
    },
];

pub(super) const MANUAL_TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        id: "t1",
        game_id: "g1",
        name: "Elementalist Lux",
        image_seed: "elementalist_lux",
        rarity: Mythical,
        description: "An ultimate skin that transforms throughout the match.",
        base_price_np: 2500,
    },
    TemplateEntry {
        id: "t2",
        game_id: "g1",
        name: "K/DA All Out Ahri",
        image_seed: "kda_ahri",
        rarity: Legendary,
        description: "Pop star sensation skin from the K/DA group.",
        base_price_np: 1500,
    },
    TemplateEntry {
        id: "t3",
        game_id: "g1",
        name: "Yasuo Nightbringer",
        image_seed: "yasuo_nightbringer",
        rarity: Legendary,
        description: "Embrace the chaos within.",
        base_price_np: 1800,
    },
    TemplateEntry {
        id: "t4",
        game_id: "g2",
        name: "Night Pegasus Whistle",
        image_seed: "night_pegasus",
        rarity: Ancient,
        description: "Summons the rare Night Pegasus mount.",
        base_price_np: 15000,
    },
    TemplateEntry {
        id: "t5",
        game_id: "g2",
        name: "Thavnairian Bustier",
        image_seed: "thavnairian_bustier",
        rarity: Rare,
        description: "A beautiful silk bustier from the near east.",
        base_price_np: 500,
    },
    TemplateEntry {
        id: "t6",
        game_id: "g3",
        name: "Fallen Hero's Vengeance Cape",
        image_seed: "fallen_hero_cape",
        rarity: Legendary,
        description: "A cape issued only to veterans of Malevelon Creek.",
        base_price_np: 4000,
    },
    TemplateEntry {
        id: "t7",
        game_id: "g3",
        name: "DP-40 Hero of the Federation",
        image_seed: "dp40_armor",
        rarity: Rare,
        description: "Standard issue armor with extra padding for democracy.",
        base_price_np: 1200,
    },
    TemplateEntry {
        id: "t8",
        game_id: "g4",
        name: "Blackstar Weapon Skin",
        image_seed: "blackstar_weapon",
        rarity: Mythical,
        description: "A skin radiating dark energy from the abyss.",
        base_price_np: 8500,
    },
    TemplateEntry {
        id: "t9",
        game_id: "g5",
        name: "Diluc: Red Dead of Night",
        image_seed: "diluc_outfit",
        rarity: Legendary,
        description: "A formal outfit for the Darknight Hero.",
        base_price_np: 3000,
    },
    TemplateEntry {
        id: "t10",
        game_id: "g5",
        name: "Jean: Sea Breeze Dandelion",
        image_seed: "jean_outfit",
        rarity: Rare,
        description: "Light summer wear for the Acting Grand Master.",
        base_price_np: 2000,
    },
    TemplateEntry {
        id: "t11",
        game_id: "g6",
        name: "Golden Pixel Engine",
        image_seed: "golden_pixel_engine",
        rarity: Ancient,
        description: "The rarest ship component in the galaxy.",
        base_price_np: 50000,
    },
];

pub(super) const ASSET_POOLS: &[AssetPool] = &[
    AssetPool {
        game_id: "g1",
        prefixes: &[
            "Crystal", "Infernal", "Project", "Star Guardian", "Blood Moon", "High Noon",
            "Pool Party", "Arcade", "Dark Star", "Spirit Blossom", "Sentinel", "Ruined",
            "Battle Academia", "Odyssey", "Winterblessed", "Coven",
        ],
        nouns: &[
            "Lux", "Ahri", "Yasuo", "Zed", "Jinx", "Thresh", "Ezreal", "Lee Sin", "Akali",
            "Vayne", "Riven", "Kai'Sa", "Teemo", "Yone", "Irelia", "Sett",
        ],
        rarities: &[Common, Uncommon, Rare, Mythical, Legendary],
    },
    AssetPool {
        game_id: "g2",
        prefixes: &[
            "Heavy", "Light", "Dark", "Ancient", "Allagan", "Chocobo", "Moogle", "Bahamut",
            "Shiva", "Ifrit", "Garlean", "Eorzean", "Ishgardian", "Ala Mhigan", "Doman",
            "Crystal",
        ],
        nouns: &[
            "Coat", "Helm", "Boots", "Gloves", "Sword", "Staff", "Grimoire", "Whistle", "Mount",
            "Barding", "Minion", "Crystal", "Earrings", "Necklace", "Ring",
        ],
        rarities: &[Common, Uncommon, Rare, Legendary, Ancient],
    },
    AssetPool {
        game_id: "g3",
        prefixes: &[
            "Tactical", "Heavy", "Light", "Scout", "Medic", "Engineer", "Democracy", "Freedom",
            "Liberty", "Veteran", "Heroic", "Super Earth", "Automaton", "Terminid", "Orbital",
        ],
        nouns: &[
            "Cape", "Helmet", "Armor", "Vest", "Boots", "Insignia", "Badge", "Rifle", "Shotgun",
            "Pistol", "Grenade", "Stim",
        ],
        rarities: &[Common, Uncommon, Rare, Legendary],
    },
    AssetPool {
        game_id: "g4",
        prefixes: &[
            "Blackstar", "Kzarka", "Dandelion", "Nouver", "Kutum", "Dim Tree", "Griffon",
            "Urugon", "Bheg", "Leebur", "Muskan", "Oogway", "Tuvala", "Naru",
        ],
        nouns: &[
            "Longsword", "Bow", "Axe", "Staff", "Blade", "Gauntlet", "Vambrace", "Kriegsmesser",
            "Cestus", "Scythe", "Greatsword", "Lancia", "Shortsword",
        ],
        rarities: &[Rare, Mythical, Legendary, Ancient],
    },
    AssetPool {
        game_id: "g5",
        prefixes: &[
            "Favonius", "Sacrificial", "Royal", "Blackcliff", "Prototype", "Iron Sting",
            "Whiteblind", "Mappa Mare", "Crescent", "Compound", "Skyward", "Amos", "Wolf's",
            "Lost Prayer",
        ],
        nouns: &[
            "Sword", "Claymore", "Polearm", "Bow", "Catalyst", "Wing Glider", "Namecard",
            "Outfit", "Vision", "Sigil",
        ],
        rarities: &[Common, Uncommon, Rare, Mythical, Legendary],
    },
    AssetPool {
        game_id: "g6",
        prefixes: &[
            "Quantum", "Plasma", "Laser", "Void", "Nebula", "Galactic", "Stellar", "Cosmic",
            "Hyper", "Warp", "Dark Matter", "Antimatter", "Photon", "Ion",
        ],
        nouns: &[
            "Engine", "Thruster", "Shield", "Cannon", "Reactor", "Hull", "Sensor", "Scanner",
            "Droid", "Module", "Capacitor", "Battery", "Antenna",
        ],
        rarities: &[Common, Uncommon, Rare, Mythical, Legendary, Ancient],
    },
];

pub(super) const INITIAL_INVENTORY: &[SeedItem] = &[
    SeedItem {
        id: "i1",
        template_id: "t1",
        owner_id: "me",
        acquired: (2023, 11, 10),
        traits: &[
            ("form", SeedTrait::Text("Light")),
            ("unlockDate", SeedTrait::Text("2023-11-10")),
            ("mastery", SeedTrait::Int(7)),
        ],
    },
    SeedItem {
        id: "i2",
        template_id: "t6",
        owner_id: "me",
        acquired: (2024, 2, 28),
        traits: &[
            ("battleScarred", SeedTrait::Bool(true)),
            ("toursCompleted", SeedTrait::Int(50)),
        ],
    },
    SeedItem {
        id: "i3",
        template_id: "t5",
        owner_id: "me",
        acquired: (2024, 1, 15),
        traits: &[
            ("dye", SeedTrait::Text("Pure White")),
            ("crafter", SeedTrait::Text("Lady Yuna")),
        ],
    },
];

pub(super) const MARKET_ITEMS: &[SeedItem] = &[
    SeedItem {
        id: "i101",
        template_id: "t4",
        owner_id: "Summoner_99",
        acquired: (2023, 12, 1),
        traits: &[
            ("source", SeedTrait::Text("Palace of the Dead")),
            ("server", SeedTrait::Text("Odin")),
        ],
    },
    SeedItem {
        id: "i102",
        template_id: "t9",
        owner_id: "Traveler_Aether",
        acquired: (2024, 1, 20),
        traits: &[
            ("edition", SeedTrait::Text("Launch")),
            ("signature", SeedTrait::Text("Dawn Winery")),
        ],
    },
    SeedItem {
        id: "i103",
        template_id: "t11",
        owner_id: "Space_Cowboy",
        acquired: (2024, 2, 14),
        traits: &[
            ("seed", SeedTrait::Int(882144)),
            ("generation", SeedTrait::Int(1)),
            ("quality", SeedTrait::Text("Pristine")),
        ],
    },
    SeedItem {
        id: "i104",
        template_id: "t2",
        owner_id: "KPopFan",
        acquired: (2023, 10, 10),
        traits: &[
            ("chroma", SeedTrait::Text("Baddest")),
            ("border", SeedTrait::Bool(true)),
        ],
    },
    SeedItem {
        id: "i105",
        template_id: "t8",
        owner_id: "Grinder_One",
        acquired: (2024, 1, 5),
        traits: &[
            ("enhancement", SeedTrait::Text("+20")),
            ("durability", SeedTrait::Int(100)),
        ],
    },
];

pub(super) const INITIAL_LISTINGS: &[SeedListing] = &[
    SeedListing {
        id: "l1",
        item_instance_id: "i101",
        seller_id: "Summoner_99",
        price_cents: 14500,
        listed: (2024, 3, 1),
    },
    SeedListing {
        id: "l2",
        item_instance_id: "i102",
        seller_id: "Traveler_Aether",
        price_cents: 3250,
        listed: (2024, 3, 2),
    },
    SeedListing {
        id: "l3",
        item_instance_id: "i103",
        seller_id: "Space_Cowboy",
        price_cents: 49000,
        listed: (2024, 3, 3),
    },
    SeedListing {
        id: "l4",
        item_instance_id: "i104",
        seller_id: "KPopFan",
        price_cents: 1650,
        listed: (2024, 3, 4),
    },
    SeedListing {
        id: "l5",
        item_instance_id: "i105",
        seller_id: "Grinder_One",
        price_cents: 8200,
        listed: (2024, 3, 4),
    },
];

pub(super) const SEED_TRADES: &[SeedTrade] = &[
    SeedTrade {
        id: "trade_1",
        item_name: "Elementalist Lux",
        seller_id: "ProGamer_99",
        price_cents: 2500,
        date: (2024, 2, 15, 10, 30),
    },
    SeedTrade {
        id: "trade_2",
        item_name: "K/DA All Out Ahri",
        seller_id: "SkinCollector",
        price_cents: 1550,
        date: (2024, 2, 20, 14, 22),
    },
    SeedTrade {
        id: "trade_3",
        item_name: "Thavnairian Bustier",
        seller_id: "FF14_Fashion",
        price_cents: 500,
        date: (2024, 2, 25, 9, 15),
    },
];
