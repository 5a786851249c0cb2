//! Seeded help requests for the home board

use super::HelpRequest;

/// Static community requests shown before any archived posts
pub fn seed_requests() -> Vec<HelpRequest> {
    let rows: [(&str, &str, &str, &str, &str, &str); 12] = [
        (
            "1",
            "Need help moving furniture",
            "Amit Sharma",
            "Moving to a new flat 2km away. Need 2 people to help lift a sofa and bed frame.",
            "1,500",
            "Bandra, Mumbai",
        ),
        (
            "2",
            "Fix leaky kitchen pipe",
            "Priya K.",
            "The sink pipe is leaking heavily. Looking for someone with basic plumbing tools.",
            "800",
            "Indiranagar, Bangalore",
        ),
        (
            "3",
            "Urgent medicine delivery",
            "Rohan Das",
            "Need someone to pick up insulin from the pharmacy and drop it at my home.",
            "300",
            "Salt Lake, Kolkata",
        ),
        (
            "4",
            "Dog walking (3 days)",
            "Sneha Kapoor",
            "Need someone to take my Golden Retriever for a 30 min walk while I'm at work.",
            "1,200",
            "Cyber City, Gurgaon",
        ),
        (
            "5",
            "Math Tutor for 10th Grade",
            "Vikram Singh",
            "Need a 2-hour crash course on Trigonometry before the exam tomorrow.",
            "2,000",
            "Remote",
        ),
        (
            "6",
            "Laptop hardware cleaning",
            "Ananya M.",
            "My laptop is overheating. Need the fans cleaned and thermal paste reapplied.",
            "1,000",
            "Hitech City, Hyderabad",
        ),
        (
            "7",
            "Garden weeding & pruning",
            "Suresh Iyer",
            "Small backyard garden needs maintenance. Tools will be provided.",
            "750",
            "Anna Nagar, Chennai",
        ),
        (
            "8",
            "Setup Smart TV & WiFi",
            "Mrs. Gupta",
            "Just bought a new TV. Need help connecting it to the internet and Netflix.",
            "500",
            "Vasant Vihar, Delhi",
        ),
        (
            "9",
            "Car wash and interior vacuum",
            "Rahul V.",
            "Deep cleaning needed for a sedan. Water access available in my driveway.",
            "600",
            "Koregaon Park, Pune",
        ),
        (
            "10",
            "Help with Grocery Shopping",
            "Arjun Mehta",
            "Elderly couple needs help buying and carrying groceries for the week.",
            "400",
            "Aliganj, Lucknow",
        ),
        (
            "11",
            "Guitar strings replacement",
            "Zoya Khan",
            "I have the strings, just don't know how to change them without snapping.",
            "350",
            "Panjim, Goa",
        ),
        (
            "12",
            "Basic Data Entry (Excel)",
            "Pankaj G.",
            "Need to convert 20 PDF pages into a clean Excel sheet. Simple copy-paste.",
            "2,500",
            "Remote",
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, requester_name, description, budget, location)| HelpRequest {
                id: id.to_string(),
                title: title.to_string(),
                requester_name: requester_name.to_string(),
                avatar_url: format!("https://i.pravatar.cc/150?u={id}"),
                description: description.to_string(),
                budget: budget.to_string(),
                location: location.to_string(),
            },
        )
        .collect()
}
