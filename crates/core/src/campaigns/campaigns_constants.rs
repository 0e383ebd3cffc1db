//! Seed catalog shipped with a fresh installation.

use rust_decimal::Decimal;

use super::campaigns_model::NewCampaign;

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    target: i64,
    raised: i64,
    donors: u64,
    image: &'static str,
    urgent: bool,
    location: &'static str,
    beneficiaries: u32,
    story: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Little Priya Needs School Books",
        description: "Help 8-year-old Priya from a slum in Mumbai get her school books and uniform. She dreams of becoming a doctor but her family can't afford education.",
        category: "Education",
        target: 25_000,
        raised: 18_500,
        donors: 47,
        image: "https://images.pexels.com/photos/8617843/pexels-photo-8617843.jpeg",
        urgent: false,
        location: "Mumbai Slums, Maharashtra",
        beneficiaries: 1,
        story: "Priya walks 2km daily to school but doesn't have books. Your ₹500 can change her life forever.",
    },
    Seed {
        id: "2",
        title: "Emergency Food for Flood Victims",
        description: "Families in Kerala are stranded without food after devastating floods. They need immediate relief - rice, dal, and clean water.",
        category: "Emergency Relief",
        target: 150_000,
        raised: 142_000,
        donors: 234,
        image: "https://images.pexels.com/photos/6646918/pexels-photo-6646918.jpeg",
        urgent: true,
        location: "Flood-affected Kerala",
        beneficiaries: 150,
        story: "Families have been without food for 3 days. Your ₹200 can feed a family for a week.",
    },
    Seed {
        id: "3",
        title: "Clean Water for Rampur Village",
        description: "500 families in Rampur village walk 5km daily for contaminated water. Help us install a clean water system.",
        category: "Water & Sanitation",
        target: 300_000,
        raised: 185_000,
        donors: 156,
        image: "https://images.pexels.com/photos/1029615/pexels-photo-1029615.jpeg",
        urgent: false,
        location: "Rampur Village, Rajasthan",
        beneficiaries: 500,
        story: "Children miss school to fetch water. Your ₹1000 can give clean water to 5 families.",
    },
    Seed {
        id: "4",
        title: "Grandmother Kamala's Medicine",
        description: "Kamala, 67, needs diabetes medicine but her family can't afford it. She raised 5 orphans and now needs our help.",
        category: "Healthcare",
        target: 45_000,
        raised: 32_000,
        donors: 89,
        image: "https://images.pexels.com/photos/3768131/pexels-photo-3768131.jpeg",
        urgent: true,
        location: "Rural Tamil Nadu",
        beneficiaries: 1,
        story: "Kamala sacrificed everything for orphans. Now it's our turn to help her.",
    },
    Seed {
        id: "5",
        title: "Warm Blankets for Street Children",
        description: "Winter is coming and 200+ street children in Delhi need warm blankets to survive the cold nights.",
        category: "Child Welfare",
        target: 80_000,
        raised: 45_000,
        donors: 123,
        image: "https://images.pexels.com/photos/8617843/pexels-photo-8617843.jpeg",
        urgent: true,
        location: "Delhi Streets",
        beneficiaries: 200,
        story: "Children sleep on cold streets. Your ₹400 can give a warm blanket to a child.",
    },
    Seed {
        id: "6",
        title: "Skill Training for Rural Women",
        description: "Teach 50 rural women tailoring skills so they can earn ₹5000/month and support their families independently.",
        category: "Women Empowerment",
        target: 200_000,
        raised: 125_000,
        donors: 78,
        image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg",
        urgent: false,
        location: "Rural Uttar Pradesh",
        beneficiaries: 50,
        story: "Women want to work but lack skills. Your ₹2000 can train a woman for life.",
    },
    Seed {
        id: "7",
        title: "Solar Lights for Village School",
        description: "Children in Sundargram study under kerosene lamps. Help us install solar lights so they can study safely.",
        category: "Education",
        target: 120_000,
        raised: 67_000,
        donors: 91,
        image: "https://images.pexels.com/photos/8617843/pexels-photo-8617843.jpeg",
        urgent: false,
        location: "Sundargram, West Bengal",
        beneficiaries: 300,
        story: "Children study in darkness. Your ₹1500 can light up their future.",
    },
    Seed {
        id: "8",
        title: "Wheelchairs for Disabled Children",
        description: "Help 15 disabled children get wheelchairs so they can go to school and play with friends.",
        category: "Healthcare",
        target: 225_000,
        raised: 156_000,
        donors: 67,
        image: "https://images.pexels.com/photos/3768131/pexels-photo-3768131.jpeg",
        urgent: false,
        location: "Pune, Maharashtra",
        beneficiaries: 15,
        story: "Children crawl to school. Your ₹15000 can give a child mobility and dignity.",
    },
    Seed {
        id: "9",
        title: "Mobile Library for Remote Villages",
        description: "Bring books and learning to 12 remote villages where children have never seen a library.",
        category: "Education",
        target: 180_000,
        raised: 89_000,
        donors: 134,
        image: "https://images.pexels.com/photos/8617843/pexels-photo-8617843.jpeg",
        urgent: false,
        location: "Remote Himachal Pradesh",
        beneficiaries: 800,
        story: "Books can travel where schools cannot. Your ₹1000 can bring a library to a village.",
    },
    Seed {
        id: "10",
        title: "Emergency Surgery for Baby Arjun",
        description: "6-month-old Arjun needs urgent heart surgery. His parents are daily wage workers who cannot afford the operation.",
        category: "Healthcare",
        target: 350_000,
        raised: 298_000,
        donors: 445,
        image: "https://images.pexels.com/photos/3768131/pexels-photo-3768131.jpeg",
        urgent: true,
        location: "AIIMS, Delhi",
        beneficiaries: 1,
        story: "Baby Arjun's heart needs fixing. Your donation can give him a chance to live and play like other children.",
    },
    Seed {
        id: "11",
        title: "Organic Farming Training",
        description: "Train 100 farmers in organic farming techniques to increase their income and protect the environment.",
        category: "Agriculture",
        target: 250_000,
        raised: 167_000,
        donors: 98,
        image: "https://images.pexels.com/photos/1595104/pexels-photo-1595104.jpeg",
        urgent: false,
        location: "Rural Punjab",
        beneficiaries: 100,
        story: "Healthy soil, healthy food, healthy farmers. Your ₹2500 can train a farmer in sustainable agriculture.",
    },
    Seed {
        id: "12",
        title: "Menstrual Hygiene for School Girls",
        description: "Provide sanitary pads and hygiene education to 500 school girls so they don't miss classes.",
        category: "Women Empowerment",
        target: 75_000,
        raised: 52_000,
        donors: 187,
        image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg",
        urgent: false,
        location: "Rural Bihar",
        beneficiaries: 500,
        story: "Every girl deserves to attend school every day. Your ₹150 can support a girl for a full year.",
    },
];

/// The twelve campaigns a fresh catalog starts with.
pub fn seed_campaigns() -> Vec<NewCampaign> {
    SEEDS
        .iter()
        .map(|seed| NewCampaign {
            id: Some(seed.id.to_string()),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            location: seed.location.to_string(),
            target_amount: Decimal::from(seed.target),
            raised_amount: Decimal::from(seed.raised),
            donor_count: seed.donors,
            is_urgent: seed.urgent,
            image_url: Some(seed.image.to_string()),
            end_date: None,
            beneficiaries: Some(seed.beneficiaries),
            story: Some(seed.story.to_string()),
        })
        .collect()
}
