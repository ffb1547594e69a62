pub const SETTLE_DELAY: f32 = 0.5;           // Time between a dismiss and the cursor advance (seconds)
pub const OVERLAY_DURATION: f32 = 0.5;       // How long a feedback overlay stays up (seconds)
pub const CARD_TRANSITION: f32 = 0.4;        // CSS transition applied to card transform/opacity (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;       // Minimum displacement on the dominant axis (pixels)
pub const EXIT_ROTATION: f32 = 15.0;         // Tilt of a card leaving sideways (degrees)
pub const MAX_TIMER_MS: u64 = 2_147_483_647; // Longest delay a browser setTimeout honors (milliseconds)

pub const DEFAULT_INPUT: &str = "videos.csv";
pub const HOME_PAGE: &str = "home.html";
pub const SWIPE_PAGE: &str = "index.html";
pub const GRID_PAGE: &str = "grid.html";

pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/360x200.png?text=Website+Preview";
pub const HERO_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/en/0/0c/OG_Poster.jpg";
