//! Religion-indicative personal names.

pub(crate) const MUSLIM: &[&str] = &[
    "muhammad", "ahmed", "ali", "hassan", "hussein", "omar", "yusuf", "ibrahim",
    "abdullah", "fatima", "aisha", "khadija", "zainab", "maryam", "amina", "salma",
    "rashid", "tariq", "bilal", "hamza", "khan",
];

pub(crate) const HINDU: &[&str] = &[
    "aarav", "vihaan", "arjun", "krishna", "rohan", "aditya", "vishnu", "ganesh",
    "lakshmi", "parvati", "saraswati", "ananya", "priya", "deepika", "shreya", "kavya",
    "sharma", "iyer", "nair", "trivedi", "patel",
];

pub(crate) const SIKH: &[&str] = &[
    "gurpreet", "harpreet", "manpreet", "jaswinder", "kuldeep", "balwinder",
    "harjit", "sukhwinder", "amarjit", "navjot", "simran", "jaspreet", "gurdeep",
    "ranjit", "hardeep", "paramjit", "inderjit", "singh", "kaur", "sandhu",
];

pub(crate) const CHRISTIAN: &[&str] = &[
    "matthew", "bartholomew", "john", "peter", "paul", "thomas", "andrew", "james",
    "mary", "elizabeth", "ruth", "rebecca", "sarah", "martha", "magdalene", "lydia",
    "christopher", "christina", "joseph", "gabriel",
];

pub(crate) const JAIN: &[&str] = &[
    "mahavir", "rishabh", "parshva", "neminath", "aadinath", "vardhman", "jinendra",
    "abhinandan", "shantinath", "chandraprabhu", "trishala", "marudevi", "brahmi",
    "sundari", "chandana", "jain", "shah", "mehta", "doshi", "sanghvi",
];

pub(crate) const BUDDHIST: &[&str] = &[
    "siddhartha", "ananda", "tenzin", "dorje", "pema", "tsering", "sonam", "lobsang",
    "tashi", "nyima", "dawa", "jampa", "thupten", "chodron", "dolma", "sangmo",
    "bodhi", "metta", "kalsang", "rinchen",
];

pub(crate) const PARSI: &[&str] = &[
    "cyrus", "darius", "jamshed", "rustom", "sohrab", "zubin", "farokh", "behram",
    "kaikhushru", "roxana", "shireen", "dinaz", "perizad", "homai", "zarine",
    "jehangir", "tata", "wadia", "godrej", "mistry",
];
