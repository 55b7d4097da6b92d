//! The four responder tables: event planning, local resources, service
//! exchange, and sponsorship/finance.

use super::{CannedRule, Responder};

/// Event ideation and planning.
pub fn event_planner() -> Responder {
    Responder::new(
        "event planner",
        vec![
            CannedRule {
                keywords: &["picnic"],
                response: "Great! For a community picnic, consider: 1. Date/Time: A sunny \
                    Saturday afternoon. 2. Location: Local park (check availability). \
                    3. Activities: Games, music, food stalls. 4. Supplies: Blankets, trash \
                    bags, first aid. 5. Promotion: Local flyers, social media.",
            },
            CannedRule {
                keywords: &["cleanup", "clean-up"],
                response: "For a community clean-up drive: 1. Target Area: Identify specific \
                    spots. 2. Date/Time: Early morning, cooler weather. 3. Equipment: Gloves, \
                    trash bags, grabbers. 4. Volunteers: Recruit through local groups. \
                    5. Disposal: Coordinate with the local municipality for waste collection.",
            },
            CannedRule {
                keywords: &["festival"],
                response: "Planning a local festival: 1. Theme: Something unique to the \
                    community. 2. Venue: Large open space or community center. 3. Attractions: \
                    Food vendors, craft stalls, live music, kids' zone. 4. Permits: Obtain all \
                    necessary local permits. 5. Marketing: Extensive local outreach.",
            },
        ],
        "That sounds interesting! A basic event plan includes: 1. Define Goal. 2. Set Date \
         & Time. 3. Choose Location. 4. Plan Activities. 5. Promote Event.",
    )
}

/// Local venues, equipment, and logistics.
pub fn local_resources() -> Responder {
    Responder::new(
        "local resources",
        vec![
            CannedRule {
                keywords: &["park", "venue"],
                response: "For parks in Bhopal, consider: 1. Van Vihar National Park (large, \
                    serene). 2. Shahpura Lake Park (good for picnics, boating). 3. Ekant Park \
                    (playground, open space). Always check local regulations for events.",
            },
            CannedRule {
                keywords: &["equipment", "sound system"],
                response: "For event equipment in Bhopal, look for: 1. 'Event Solutions \
                    Bhopal' (sound, lighting). 2. 'Sharma Tent House' (tents, chairs). Local \
                    community centers might also offer basic equipment rentals.",
            },
            CannedRule {
                keywords: &["catering", "food"],
                response: "For catering services in Bhopal: 1. 'Bhopali Zaika Catering' \
                    (local cuisine). 2. 'Celebrations Caterers' (multi-cuisine options). \
                    3. Small local restaurants for specific needs.",
            },
        ],
        "I can help with local resource suggestions. Please specify what kind of resource \
         you're looking for (e.g., 'a venue', 'catering', 'equipment').",
    )
}

/// Peer-to-peer service exchange.
pub fn service_exchange() -> Responder {
    Responder::new(
        "service exchange",
        vec![
            CannedRule {
                keywords: &["photographer", "photos"],
                response: "Looking for a photographer in Bhopal? Check out 'Creative Lens \
                    Photography' or 'Pixel Perfect Studio'. You might also find local talent \
                    in community art groups.",
            },
            CannedRule {
                keywords: &["gardener", "gardening"],
                response: "Need gardening help? 'Green Thumb Services' offers basic \
                    gardening. For community volunteers, try posting on local social media \
                    groups.",
            },
            CannedRule {
                keywords: &["tutor", "teaching"],
                response: "For tutoring services in Bhopal: 1. 'Success Tutorials' (various \
                    subjects). 2. Local college students often offer private tuition. Specify \
                    subject and level for best matches.",
            },
            CannedRule {
                keywords: &["offer"],
                response: "Great! To offer a service, please tell me what you offer and your \
                    general availability. We'll connect you with community members who need \
                    your skills.",
            },
        ],
        "I can help you find or offer local services. Please tell me what service you need \
         (e.g., 'I need a gardener') or what you want to offer (e.g., 'I offer tutoring \
         services').",
    )
}

/// Budgeting, fundraising, and sponsorship advice.
pub fn sponsorship_finance() -> Responder {
    Responder::new(
        "sponsorship and finance",
        vec![
            CannedRule {
                keywords: &["sponsorship", "sponsor"],
                response: "To secure sponsorship for your event, consider: 1. Local \
                    businesses (restaurants, shops). 2. Community banks/credit unions. \
                    3. Local representatives. Prepare a clear proposal outlining benefits \
                    for sponsors.",
            },
            CannedRule {
                keywords: &["budget", "cost"],
                response: "For event budgeting: 1. Estimate all expenses (venue, food, \
                    marketing, equipment). 2. Add a 10-15% contingency. 3. Track all income \
                    sources (tickets, sponsorships). Focus on maximizing value for money.",
            },
            CannedRule {
                keywords: &["fundraising"],
                response: "Fundraising ideas for community projects: 1. Online crowdfunding. \
                    2. Local bake sales or car washes. 3. Partnership with local non-profits. \
                    4. Small donation drives at local gatherings.",
            },
        ],
        "I can offer basic financial and sponsorship advice. What specific area are you \
         interested in (e.g., 'getting sponsors', 'creating a budget', 'fundraising')?",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gardener_request_hits_service_table() {
        let r = service_exchange();
        let answer = r.respond("looking for a gardener");
        assert!(answer.contains("Green Thumb Services"));
    }

    #[test]
    fn picnic_request_hits_event_table() {
        let r = event_planner();
        assert!(r.respond("help me plan a picnic").contains("community picnic"));
    }

    #[test]
    fn venue_request_hits_resource_table() {
        let r = local_resources();
        assert!(r.respond("suggest a venue").contains("Van Vihar"));
    }

    #[test]
    fn budget_request_hits_finance_table() {
        let r = sponsorship_finance();
        assert!(r.respond("how do I make a budget?").contains("contingency"));
    }

    #[test]
    fn unmatched_input_returns_each_default() {
        let off_topic = "xyzzy";
        assert!(event_planner().respond(off_topic).contains("basic event plan"));
        assert!(local_resources().respond(off_topic).contains("resource suggestions"));
        assert!(service_exchange().respond(off_topic).contains("find or offer"));
        assert!(sponsorship_finance().respond(off_topic).contains("financial and sponsorship"));
    }
}
