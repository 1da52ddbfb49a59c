//! Fixed catalogs: the world region list and the professional archetypes.

/// Every region a persona can be drawn from. Each name appears once.
pub const GLOBAL_REGIONS: &[&str] = &[
    "India", "China", "United States", "Indonesia", "Pakistan", "Nigeria", "Brazil",
    "Bangladesh", "Russia", "Ethiopia", "Mexico", "Japan", "Egypt", "Philippines",
    "Democratic Republic of the Congo", "Vietnam", "Iran", "Turkey", "Germany", "Thailand",
    "Tanzania", "United Kingdom", "France", "South Africa", "Italy", "Kenya", "Myanmar",
    "Colombia", "South Korea", "Spain", "Argentina", "Uganda", "Algeria", "Sudan", "Iraq",
    "Ukraine", "Poland", "Canada", "Morocco", "Saudi Arabia", "Uzbekistan", "Peru", "Angola",
    "Venezuela", "Yemen", "Mozambique", "Ghana", "Cameroon", "Madagascar", "Australia",
    "North Korea", "Taiwan", "Côte d’Ivoire", "Nepal", "Niger", "Sri Lanka", "Burkina Faso",
    "Mali", "Romania", "Malawi", "Chile", "Kazakhstan", "Zambia", "Syria", "Ecuador",
    "Netherlands", "Senegal", "Cambodia", "Chad", "Somalia", "Zimbabwe", "Guinea", "Rwanda",
    "Benin", "Burundi", "Tunisia", "South Sudan", "Belgium", "Bolivia", "Haiti", "Cuba",
    "Jordan", "United Arab Emirates", "Honduras", "Azerbaijan", "Sweden", "Portugal",
    "Tajikistan", "Greece", "Czech Republic", "Hungary", "Belarus", "Austria", "Switzerland",
    "Israel", "Sierra Leone", "Laos", "Hong Kong", "Bulgaria", "Libya", "Serbia", "Paraguay",
    "El Salvador", "Lebanon", "Nicaragua", "Kyrgyzstan", "Turkmenistan", "Singapore", "Denmark",
    "Finland", "Slovakia", "Norway", "Costa Rica", "Palestine (West Bank and Gaza)",
    "New Zealand", "Liberia", "Panama", "Central African Republic", "Republic of the Congo",
    "Mauritania", "Oman", "Kuwait", "Georgia", "Eritrea", "Uruguay", "Mongolia", "Armenia",
    "Qatar", "Albania", "Lithuania", "Namibia", "Gambia", "Botswana", "Gabon", "Lesotho",
    "North Macedonia", "Slovenia", "Guinea-Bissau", "Latvia", "Bahrain", "Equatorial Guinea",
    "Trinidad and Tobago", "Estonia", "Timor-Leste", "Mauritius", "Cyprus", "Eswatini",
    "Djibouti", "Fiji", "Bhutan", "Comoros", "Montenegro", "Solomon Islands", "Luxembourg",
    "Suriname", "Cabo Verde", "Micronesia", "Malta", "Maldives", "Belize", "Bahamas", "Iceland",
    "Vanuatu", "Barbados", "Sao Tome and Principe", "Samoa", "Saint Lucia", "Kiribati",
    "Grenada", "Tonga", "Seychelles", "Antigua and Barbuda", "Andorra", "Dominica",
    "Marshall Islands", "Saint Vincent and the Grenadines", "Palau", "Tuvalu", "Nauru",
    "Monaco", "Liechtenstein", "San Marino", "Holy See (Vatican City)", "Saint Kitts and Nevis",
    "Bermuda", "Greenland", "Aruba", "Channel Islands", "French Polynesia", "New Caledonia",
    "Faroe Islands", "Guam", "Cayman Islands", "Northern Mariana Islands", "American Samoa",
];

/// Professions picked uniformly at random for each synthesis run.
pub const ARCHETYPES: &[&str] = &[
    "Software Developer", "Web Developer", "DevOps Engineer", "Cloud Architect",
    "Data Scientist", "AI Engineer", "UX Designer", "Game Designer", "Cybersecurity Analyst",
    "Blockchain Developer", "Doctor", "Surgeon", "Pediatrician", "Cardiologist", "Psychiatrist",
    "Dentist", "Pharmacist", "Nurse Practitioner", "Physical Therapist", "Biomedical Engineer",
    "Mechanical Engineer", "Civil Engineer", "Electrical Engineer", "Chemical Engineer",
    "Aerospace Engineer", "Nuclear Engineer", "Materials Scientist", "Physicist", "Chemist",
    "Astronomer", "Accountant", "Investment Banker", "Financial Planner", "Tax Consultant",
    "Venture Capitalist", "Portfolio Manager", "Economist", "Actuary", "Property Manager",
    "Real Estate Agent", "Teacher", "Professor", "Tutor", "Principal", "Curriculum Developer",
    "Librarian", "Instructional Designer", "ESL Teacher", "Corporate Trainer",
    "Academic Advisor", "Graphic Designer", "Photographer", "Filmmaker", "Journalist",
    "Content Creator", "Animator", "Fashion Designer", "Fine Artist", "Art Director",
    "Musician",
];

/// Region names sorted alphabetically, for filter option lists.
pub fn sorted_regions() -> Vec<&'static str> {
    let mut regions = GLOBAL_REGIONS.to_vec();
    regions.sort_unstable();
    regions
}
