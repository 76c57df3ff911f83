//! Ethnicity name tables (first and last names per category).
//!
//! Entries must not double as ordinary English words ("hunter", "park"),
//! otherwise name-free text inflates the counts.

pub(crate) const BLACK: &[&str] = &[
    "jamal", "deshawn", "tyrone", "darnell", "lamar", "malik", "terrell", "jermaine",
    "kareem", "demetrius", "latoya", "tanisha", "tyrell", "keisha", "lakisha", "aaliyah",
    "imani", "shanice", "tamika", "shaniqua", "washington", "jefferson", "booker",
    "mayweather", "mosley", "jackson", "jenkins", "gaines", "dorsey", "okafor",
];

pub(crate) const ASIAN: &[&str] = &[
    "wei", "jun", "hiroshi", "takeshi", "haruto", "jin", "hyun", "yuki", "mei", "li", "xiu",
    "akiko", "sakura", "ji-woo", "thanh", "linh", "nguyen", "tran", "kim", "nakamura",
    "yang", "chen", "wang", "zhang", "liu", "yamamoto", "tanaka", "suzuki", "choi", "huang",
    "singh", "patel", "khan",
];

pub(crate) const WHITE: &[&str] = &[
    "connor", "colton", "wyatt", "cody", "dustin", "luke", "jake", "brett", "garrett",
    "molly", "claire", "katelyn", "allison", "emily", "abigail", "hannah", "meredith",
    "smith", "johnson", "miller", "anderson", "olson", "schmidt", "mueller", "sullivan",
    "murphy", "kowalski", "larsen", "hansen", "becker",
];

pub(crate) const NATIVE_AMERICAN: &[&str] = &[
    "ahanu", "chayton", "hototo", "enapay", "hakan", "kohana", "mato", "takoda",
    "wapi", "aiyana", "kimi", "nayeli", "sakari", "tala", "winona", "begay", "yazzie",
    "benally", "tsosie", "nez", "locklear", "oxendine", "brayboy", "chavis", "cummings",
    "manuelito", "tso", "etsitty", "cly", "tsinajinnie",
];

pub(crate) const HISPANIC: &[&str] = &[
    "alejandro", "santiago", "mateo", "diego", "javier", "carlos", "miguel", "jose",
    "guadalupe", "ximena", "valentina", "camila", "lucia", "sofia", "marisol", "garcia",
    "rodriguez", "martinez", "hernandez", "lopez", "gonzalez", "perez", "sanchez",
    "ramirez", "torres", "flores", "rivera", "gomez", "diaz", "morales",
];

pub(crate) const INTER_RACIAL: &[&str] = &[
    "garcia-smith", "nguyen-johnson", "kim-williams", "lopez-chen", "jackson-lee",
    "patel-jones", "rivera-kim", "martinez-wang", "tanaka-brown", "okafor-miller",
    "santos-park", "hernandez-nguyen", "davis-yamamoto", "wilson-chavez", "cruz-taylor",
];
