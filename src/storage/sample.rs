//! Records shown on first launch, before any data file exists.

use crate::field::{self, Address, BuyerType, Email, Info, MeetUpName, Name, Phone, Tag};
use crate::record::{Buyer, MeetUp};

struct SampleBuyer {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    buyer_type: BuyerType,
    tags: &'static [&'static str],
}

const BUYERS: [SampleBuyer; 4] = [
    SampleBuyer {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        buyer_type: BuyerType::Buyer,
        tags: &["friends"],
    },
    SampleBuyer {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        buyer_type: BuyerType::Seller,
        tags: &["colleagues", "friends"],
    },
    SampleBuyer {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        buyer_type: BuyerType::Buyer,
        tags: &["neighbours"],
    },
    SampleBuyer {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        buyer_type: BuyerType::Seller,
        tags: &["family"],
    },
];

const MEET_UPS: [[&str; 4]; 3] = [
    [
        "Sales Pitch",
        "Pitching property at Bukit Timah.",
        "2024-09-11 12:00",
        "2024-09-11 12:59",
    ],
    [
        "Networking Session",
        "Networking with real estate agents.",
        "2024-10-12 17:30",
        "2024-10-12 19:45",
    ],
    [
        "Condo Viewing",
        "Show Bernice the unit at Serangoon Gardens.",
        "2024-10-20 10:00",
        "2024-10-20 11:30",
    ],
];

pub fn sample_buyers() -> Vec<Buyer> {
    BUYERS
        .iter()
        .filter_map(|sample| {
            Some(Buyer::new(
                Name::parse(sample.name).ok()?,
                Phone::parse(sample.phone).ok()?,
                Email::parse(sample.email).ok()?,
                Address::parse(sample.address).ok()?,
                sample.buyer_type,
                sample
                    .tags
                    .iter()
                    .map(|tag| Tag::parse(*tag))
                    .collect::<Result<Vec<_>, _>>()
                    .ok()?,
            ))
        })
        .collect()
}

pub fn sample_meet_ups() -> Vec<MeetUp> {
    MEET_UPS
        .iter()
        .filter_map(|[name, info, from, to]| {
            Some(MeetUp::new(
                MeetUpName::parse(*name).ok()?,
                Info::parse(*info).ok()?,
                field::From::parse(from).ok()?,
                field::To::parse(to).ok()?,
            ))
        })
        .collect()
}
