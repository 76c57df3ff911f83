//! American/British spelling pairs.

pub(crate) const AMERICAN_TO_BRITISH: &[(&str, &str)] = &[
    ("accessorize", "accessorise"),
    ("aging", "ageing"),
    ("aluminum", "aluminium"),
    ("analyze", "analyse"),
    ("analyzed", "analysed"),
    ("analyzing", "analysing"),
    ("apologize", "apologise"),
    ("armor", "armour"),
    ("behavior", "behaviour"),
    ("behaviors", "behaviours"),
    ("catalog", "catalogue"),
    ("center", "centre"),
    ("centers", "centres"),
    ("centered", "centred"),
    ("check", "cheque"),
    ("civilization", "civilisation"),
    ("color", "colour"),
    ("colors", "colours"),
    ("colored", "coloured"),
    ("colorful", "colourful"),
    ("criticize", "criticise"),
    ("defense", "defence"),
    ("dialog", "dialogue"),
    ("emphasize", "emphasise"),
    ("favor", "favour"),
    ("favorite", "favourite"),
    ("favorites", "favourites"),
    ("fiber", "fibre"),
    ("flavor", "flavour"),
    ("gray", "grey"),
    ("harbor", "harbour"),
    ("honor", "honour"),
    ("humor", "humour"),
    ("jewelry", "jewellery"),
    ("labor", "labour"),
    ("license", "licence"),
    ("liter", "litre"),
    ("maneuver", "manoeuvre"),
    ("meter", "metre"),
    ("mold", "mould"),
    ("neighbor", "neighbour"),
    ("neighbors", "neighbours"),
    ("neighborhood", "neighbourhood"),
    ("offense", "offence"),
    ("organization", "organisation"),
    ("organizations", "organisations"),
    ("organize", "organise"),
    ("organized", "organised"),
    ("pajamas", "pyjamas"),
    ("practice", "practise"),
    ("prioritize", "prioritise"),
    ("program", "programme"),
    ("realize", "realise"),
    ("realized", "realised"),
    ("recognize", "recognise"),
    ("recognized", "recognised"),
    ("rumor", "rumour"),
    ("skeptical", "sceptical"),
    ("theater", "theatre"),
    ("tire", "tyre"),
    ("traveled", "travelled"),
    ("traveler", "traveller"),
    ("traveling", "travelling"),
    ("vapor", "vapour"),
];
