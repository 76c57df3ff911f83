//! Country names grouped by World Bank income tier.

pub(crate) const HIGH_INCOME: &[&str] = &[
    "australia", "austria", "bahrain", "belgium", "canada", "chile", "croatia",
    "cyprus", "czech republic", "denmark", "estonia", "finland", "france", "germany",
    "greece", "hong kong", "hungary", "iceland", "ireland", "israel", "italy", "japan",
    "kuwait", "latvia", "lithuania", "luxembourg", "malta", "netherlands",
    "new zealand", "norway", "oman", "poland", "portugal", "qatar", "saudi arabia",
    "singapore", "slovakia", "slovenia", "south korea", "spain", "sweden",
    "switzerland", "taiwan", "united arab emirates", "united kingdom", "united states",
    "uruguay",
];

pub(crate) const UPPER_MIDDLE_INCOME: &[&str] = &[
    "albania", "argentina", "armenia", "azerbaijan", "belarus", "bosnia and herzegovina",
    "botswana", "brazil", "bulgaria", "china", "colombia", "costa rica", "cuba",
    "dominican republic", "ecuador", "fiji", "gabon", "georgia", "guatemala", "iraq",
    "jamaica", "kazakhstan", "libya", "malaysia", "mauritius", "mexico", "montenegro",
    "namibia", "north macedonia", "panama", "paraguay", "peru", "russia", "serbia",
    "south africa", "suriname", "thailand", "turkey", "turkmenistan",
];

pub(crate) const LOWER_MIDDLE_INCOME: &[&str] = &[
    "algeria", "angola", "bangladesh", "benin", "bhutan", "bolivia", "cambodia",
    "cameroon", "comoros", "djibouti", "egypt", "el salvador", "eswatini", "ghana",
    "haiti", "honduras", "india", "indonesia", "iran", "ivory coast", "kenya",
    "kyrgyzstan", "laos", "lebanon", "lesotho", "mauritania", "mongolia", "morocco",
    "myanmar", "nepal", "nicaragua", "nigeria", "pakistan", "papua new guinea",
    "philippines", "senegal", "sri lanka", "tajikistan", "tanzania", "tunisia",
    "ukraine", "uzbekistan", "vietnam", "zambia", "zimbabwe",
];

pub(crate) const LOW_INCOME: &[&str] = &[
    "afghanistan", "burkina faso", "burundi", "central african republic", "chad",
    "democratic republic of the congo", "eritrea", "ethiopia", "gambia", "guinea",
    "guinea-bissau", "liberia", "madagascar", "malawi", "mali", "mozambique", "niger",
    "north korea", "rwanda", "sierra leone", "somalia", "south sudan", "sudan", "syria",
    "togo", "uganda", "yemen",
];
