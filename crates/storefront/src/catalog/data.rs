//! Built-in catalog listings.

/// One title as listed on the storefront, before ids are assigned.
#[derive(Debug, Clone, Copy)]
pub(super) struct GameSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub video_url: &'static str,
    pub youtube_url: &'static str,
    pub price: &'static str,
    pub genre: &'static str,
    pub publisher: &'static str,
    pub release_date: &'static str,
    pub platforms: &'static [&'static str],
    pub rating: &'static str,
    pub features: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// Number of listings shown in the featured section (taken from the front of
/// [`LISTINGS`]).
pub(super) const FEATURED_COUNT: usize = 3;

/// Every title sold in the store, in shelf order.
pub(super) const LISTINGS: &[GameSeed] = &[
    GameSeed {
        title: "Grand Theft Auto VI",
        description: "Live the high life or the criminal underworld in a vast city teeming with \
                      secrets. Race, strategize, and build your empire through singleplayer \
                      campaigns or wild online multiplayer.",
        image_url: "/gta-img.webp",
        video_url: "/gta6.mp4",
        youtube_url: "https://www.youtube.com/watch?v=QdBZY2fkU-0",
        price: "€69.99",
        genre: "Action Adventure",
        publisher: "Rockstar Games",
        release_date: "2025-12-01",
        platforms: &["PC", "PlayStation 5", "Xbox Series X"],
        rating: "PEGI 18",
        features: &[
            "Open world metropolis",
            "Dynamic missions",
            "Car and gear upgrades",
            "Online world",
        ],
        tags: &["Crime", "Shooter", "Sandbox"],
    },
    GameSeed {
        title: "Cyberpunk 2077",
        description: "Dive into the neon-drenched streets of Night City: deep questlines, brutal \
                      battles, character upgrades, and a living dystopian world shaped by your \
                      choices.",
        image_url: "/cyberpunk.jpg",
        video_url: "/cyberpunk2077.mp4",
        youtube_url: "https://www.youtube.com/watch?v=8X2kIfS6fb8",
        price: "€42.50",
        genre: "RPG",
        publisher: "CD Projekt Red",
        release_date: "2022-12-10",
        platforms: &["PC", "PlayStation 4", "Xbox One"],
        rating: "PEGI 18",
        features: &[
            "Branching story",
            "Customization & hacking",
            "Large city to explore",
            "Combat & stealth options",
        ],
        tags: &["Cyberpunk", "Singleplayer", "FPS"],
    },
    GameSeed {
        title: "Red Dead Redemption II",
        description: "Become an outlaw in the untamed Old West. Choose your path, build your \
                      camp, and ride through stunning landscapes in a dramatic, branching story.",
        image_url: "/red-dead-redemption.jpg",
        video_url: "/rdr2.mp4",
        youtube_url: "https://www.youtube.com/watch?v=gmA6MrX81z4",
        price: "€34.99",
        genre: "Adventure",
        publisher: "Rockstar Games",
        release_date: "2018-10-26",
        platforms: &["PC", "PlayStation 4", "Xbox One"],
        rating: "PEGI 18",
        features: &[
            "Expansive wild west",
            "Horse and resource management",
            "Moral choices",
            "Action-packed gunfights",
        ],
        tags: &["Western", "Adventure", "Open World"],
    },
    GameSeed {
        title: "Elden Ring",
        description: "Venture into a mysterious fantasy world. Battle titanic enemies, uncover \
                      ancient lore, and master versatile combat, solo or in online co-op.",
        image_url: "/elden-ring.avif",
        video_url: "/eldenring.mp4",
        youtube_url: "https://www.youtube.com/watch?v=E3Huy2cdih0",
        price: "€49.90",
        genre: "Action RPG",
        publisher: "FromSoftware",
        release_date: "2022-02-25",
        platforms: &["PC", "PlayStation 5", "Xbox Series X"],
        rating: "PEGI 16",
        features: &[
            "Open fantasy world",
            "Legendary bosses",
            "Flexible builds",
            "Online co-op/invasion",
        ],
        tags: &["Fantasy", "Dark", "Soulslike"],
    },
    GameSeed {
        title: "Minecraft",
        description: "Build, explore, and survive in infinite block worlds solo or with friends. \
                      Design, battle, trade and create anything your imagination dreams up.",
        image_url: "/minecraft.jpg",
        video_url: "/minecraft.mp4",
        youtube_url: "https://www.youtube.com/watch?v=MmB9b5njVbA",
        price: "€24.99",
        genre: "Sandbox",
        publisher: "Mojang Studios",
        release_date: "2011-11-18",
        platforms: &["PC", "PlayStation", "Xbox", "Nintendo Switch", "Mobile"],
        rating: "PEGI 7",
        features: &[
            "Infinite building",
            "Online co-op",
            "Adventures & survival",
            "Mods & redstone",
        ],
        tags: &["Sandbox", "Survival", "Creative"],
    },
    GameSeed {
        title: "The Witcher 3 - Wild Hunt",
        description: "Play as Geralt the monster hunter. Travel a vast fantasy world, take on \
                      contracts, find love and change fate with choices in gripping quests.",
        image_url: "/the-witcher.jpg",
        video_url: "/witcher3.mp4",
        youtube_url: "https://www.youtube.com/watch?v=ndl1W4ltcmg",
        price: "€19.99",
        genre: "RPG",
        publisher: "CD Projekt Red",
        release_date: "2015-05-19",
        platforms: &["PC", "PlayStation 4", "Xbox One", "Nintendo Switch"],
        rating: "PEGI 18",
        features: &[
            "Huge fantasy world",
            "Monster contracts",
            "Deep storylines",
            "Alchemy & gear upgrades",
        ],
        tags: &["Fantasy", "Story-rich", "Quest"],
    },
    GameSeed {
        title: "Hogwarts Legacy",
        description: "Discover Hogwarts in the 1800s. Attend classes, learn magic, fly, explore \
                      secret dungeons, and determine your own destiny in a magical open world.",
        image_url: "/hogwarts-legacy.jpg",
        video_url: "/hogwarts-legacy.mp4",
        youtube_url: "https://www.youtube.com/watch?v=BtyBjOW8sGY",
        price: "€59.99",
        genre: "Action RPG",
        publisher: "Warner Bros. Games",
        release_date: "2023-02-10",
        platforms: &["PC", "PlayStation 5", "Xbox Series X"],
        rating: "PEGI 12",
        features: &[
            "Wizard spells",
            "Castle & world exploration",
            "Flying on brooms & mounts",
            "Character upgrades",
        ],
        tags: &["Magic", "Adventure", "Story"],
    },
    GameSeed {
        title: "Battlefield 6",
        description: "Join massive online battles across destructible maps and dynamic weather. \
                      Lead squads, pilot vehicles, and adapt tactics to win against rivals \
                      worldwide.",
        image_url: "/battlefield.jpg",
        video_url: "/battlefield.mp4",
        youtube_url: "https://www.youtube.com/watch?v=ASzOzrB-a9E",
        price: "€54.90",
        genre: "Shooter",
        publisher: "EA DICE",
        release_date: "2024-10-20",
        platforms: &["PC", "PlayStation 5", "Xbox Series X"],
        rating: "PEGI 18",
        features: &[
            "Large destructible maps",
            "Squad-based multiplayer",
            "Realistic vehicles",
            "Dynamic weather & graphics",
        ],
        tags: &["Multiplayer", "Battle", "Shooter"],
    },
];
