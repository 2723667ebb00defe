pub const HTTP_TIMEOUT_SECS: u64       = 30;

pub const DEMO_USERS: usize            = 2;

// Local payments, in whole units
pub const USER_PAYMENT_1: i64          = 80; // USER1 -> USER2
pub const USER_PAYMENT_2: i64          = 40; // USER2 -> USER1
pub const ADMIN_PAYMENT_1: i64         = 60; // USER1 -> USER2, signed by ADMIN
pub const ADMIN_PAYMENT_2: i64         = 30; // USER2 -> USER1, signed by ADMIN

// External trade
pub const PEER_TRUST_LIMIT: i64        = 100; // HOURs
pub const EXTERNAL_PAYMENT_1: i64      = 20;  // COINB received by USERB1
pub const EXTERNAL_PAYMENT_2: i64      = 5;   // COINA received by USERA1

pub const RATE_A: (u32, u32)           = (1, 1);  // 1 COINA = 1 HOUR
pub const RATE_B: (u32, u32)           = (1, 10); // 1 COINB = 1/10 HOUR
