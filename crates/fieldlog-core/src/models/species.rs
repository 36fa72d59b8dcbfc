//! Common species list for capture-time hints.
//!
//! Advisory only; free-text species names are always accepted.

pub const COMMON_SPECIES: &[&str] = &[
    "White-tailed Deer",
    "Eastern Gray Squirrel",
    "American Black Bear",
    "Wild Turkey",
    "Eastern Cottontail Rabbit",
    "Red Fox",
    "Coyote",
    "Raccoon",
    "Gray Wolf",
    "Bald Eagle",
    "Great Horned Owl",
    "American Robin",
    "Northern Cardinal",
    "Blue Jay",
    "Eastern Bluebird",
    "Pileated Woodpecker",
    "Downy Woodpecker",
    "American Woodcock",
    "Ruffed Grouse",
    "Common Loon",
    "Canada Goose",
    "Mallard Duck",
    "Wood Duck",
    "American Beaver",
    "North American Porcupine",
    "Striped Skunk",
    "Virginia Opossum",
    "Bobcat",
    "Fisher",
    "Pine Marten",
    "River Otter",
    "Moose",
    "Caribou",
    "Snowshoe Hare",
    "Arctic Hare",
    "Muskox",
    "Polar Bear",
    "Grizzly Bear",
    "Bison",
    "Pronghorn",
    "Bighorn Sheep",
    "Mountain Goat",
    "Elk",
    "Mule Deer",
    "Mountain Lion",
    "Black-tailed Prairie Dog",
    "American Badger",
    "Wolverine",
    "Lynx",
    "Other",
];
