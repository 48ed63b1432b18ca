//! Fixed output blocks for the builtin command table.

use crate::stats::SystemStats;

pub(crate) const BOOT_BANNER: &[&str] = &[
    "╔══════════════════════════════════════════════════════════════╗",
    "║                    🚀 EXODUS OS TERMINAL v2.0                ║",
    "║                  Advanced Developer Interface                ║",
    "╚══════════════════════════════════════════════════════════════╝",
    "",
    "⚡ SYSTEM INITIALIZATION COMPLETE",
    "🔥 Welcome to the most interactive portfolio terminal!",
    "",
    "💡 This isn't just a terminal - it's a gateway to my world.",
    "   Type \"help\" to discover what makes this special.",
    "",
    "🎯 Pro tip: Try \"matrix\", \"skills\", or \"projects\" for something cool!",
    "",
];

pub(crate) const HELP: &[&str] = &[
    "🎮 EXODUS OS TERMINAL - COMMAND REFERENCE",
    "═══════════════════════════════════════════",
    "",
    "🔥 SPECIAL COMMANDS:",
    "  matrix           - Enter the Matrix (visual effect)",
    "  hack             - Simulate hacking sequence",
    "  skills           - Interactive skills visualization",
    "  projects         - Project tree with stats",
    "  system           - Show system information",
    "",
    "👨‍💻 PROFILE COMMANDS:",
    "  whoami           - User information",
    "  sudo pitch       - Elevator pitch",
    "  contact          - Contact information",
    "  achievements     - Awards and recognition",
    "  social           - Social media links",
    "",
    "🛠️ TECHNICAL COMMANDS:",
    "  ps aux           - Running processes",
    "  top              - System performance",
    "  git status       - Current projects status",
    "  docker ps        - Container status",
    "",
    "🎯 FUN COMMANDS:",
    "  fortune          - Random tech quote",
    "  cowsay <text>    - ASCII art with message",
    "  weather addis    - Addis Ababa weather",
    "  coffee           - Coffee status",
    "",
    "⚡ SYSTEM COMMANDS:",
    "  clear            - Clear terminal",
    "  exit             - Close terminal",
    "  login <name>     - Change user",
    "",
];

pub(crate) const MATRIX: &[&str] = &[
    "🔴 ENTERING THE MATRIX...",
    "",
    "01001000 01100101 01101100 01101100 01101111",
    "01010111 01101111 01110010 01101100 01100100",
    "",
    "🟢 MATRIX MODE ACTIVATED",
    "   Reality is just code...",
    "   And I write the code.",
    "",
    "💊 Red pill taken. Welcome to the real world.",
    "",
];

pub(crate) const HACK: &[&str] = &[
    "🔴 INITIATING HACKING SEQUENCE...",
    "",
    "[████████████████████████████████] 100%",
    "",
    "🔓 ACCESS GRANTED",
    "📁 Accessing mainframe...",
    "🔍 Scanning for vulnerabilities...",
    "⚡ Exploiting buffer overflow...",
    "🎯 Payload delivered successfully!",
    "",
    "😎 Just kidding! This is just for fun.",
    "   Real hacking is about ethical security research.",
    "",
];

pub(crate) const SKILLS: &[&str] = &[
    "🎨 INTERACTIVE SKILLS VISUALIZATION",
    "═══════════════════════════════════",
    "",
    "🔥 Frontend:     ████████████████████ 95%",
    "⚛️  React/Next:   ████████████████████ 90%",
    "📱 React Native: ██████████████████   85%",
    "🎨 UI/UX:        ███████████████████  88%",
    "",
    "⚙️  Backend:      ████████████████████ 92%",
    "🟢 Node.js:      ████████████████████ 90%",
    "🐍 Python:       ██████████████████   85%",
    "🗄️  Databases:    ███████████████████  87%",
    "",
    "☁️  DevOps:       ██████████████████   80%",
    "🐳 Docker:       ███████████████████  85%",
    "☁️  AWS:          ██████████████████   82%",
    "🔧 CI/CD:        ███████████████████  83%",
    "",
    "🤖 AI/ML:        ████████████████     75%",
    "🧠 TensorFlow:   ███████████████      70%",
    "🔮 APIs:         ████████████████     78%",
    "",
];

pub(crate) const PROJECTS: &[&str] = &[
    "📁 PROJECT TREE STRUCTURE",
    "═══════════════════════════",
    "",
    "🌱 agrix/",
    "├── 📊 5,000+ active users",
    "├── 🏆 Winner - Agricultural Innovation",
    "├── 💰 $15K funding secured",
    "└── 🚀 Status: Production",
    "",
    "🩸 bloodhero-ethiopia/",
    "├── 📊 12,000+ users",
    "├── 🏥 50+ hospitals connected",
    "├── 🏆 Healthcare Innovation Award",
    "└── 🚀 Status: Production",
    "",
    "🎓 freshman-placement/",
    "├── 📊 50,000+ students processed",
    "├── 💰 $25K grant received",
    "├── 🏫 100+ institutions",
    "└── 🚀 Status: Deployed",
    "",
    "📱 unigo/",
    "├── 📊 2,000+ beta users",
    "├── 🗺️  AR navigation features",
    "├── 🎯 Campus-focused",
    "└── 🚀 Status: Beta",
    "",
    "📊 TOTAL IMPACT:",
    "├── 👥 69,000+ users served",
    "├── 💰 $40K+ funding raised",
    "├── 🏆 5+ awards won",
    "└── 🌍 Real-world impact achieved",
    "",
];

pub(crate) const WHOAMI: &[&str] = &[
    "👨‍💻 CURRENT USER: EXODUS TOLA",
    "═══════════════════════════════",
    "",
    "🆔 Username: exodus",
    "🏠 Home: /home/exodus",
    "🌍 Location: Addis Ababa, Ethiopia",
    "💼 Role: Full-Stack Developer & Entrepreneur",
    "🎯 Mission: Building technology for local impact",
    "",
    "🔑 PERMISSIONS:",
    "├── sudo: ✅ (Can solve any problem)",
    "├── create: ✅ (Unlimited innovation)",
    "├── deploy: ✅ (Production-ready solutions)",
    "└── inspire: ✅ (Community leadership)",
    "",
    "📊 USER STATS:",
    "├── Experience: 3+ years",
    "├── Projects: 8 major applications",
    "├── Users Impacted: 69,000+",
    "└── Coffee Consumed: ∞",
    "",
];

pub(crate) const SUDO_PITCH: &[&str] = &[
    "🎯 EXODUS TOLA - ELEVATOR PITCH",
    "═══════════════════════════════",
    "",
    "👋 Hi! I'm Exodus, a full-stack developer and entrepreneur",
    "   from Addis Ababa, Ethiopia.",
    "",
    "🚀 WHAT I DO:",
    "├── Build scalable web and mobile applications",
    "├── Solve real-world problems with technology",
    "├── Focus on local impact and community development",
    "└── Mentor and inspire the next generation of developers",
    "",
    "📊 PROVEN TRACK RECORD:",
    "├── 69,000+ users across my applications",
    "├── $40K+ in funding and grants secured",
    "├── 5+ awards for innovation and impact",
    "└── 2,500+ followers on my tech channel",
    "",
    "💡 MY MISSION:",
    "   \"To leverage technology in creating sustainable solutions",
    "    that address local challenges while building a thriving",
    "    tech ecosystem in Ethiopia and beyond.\"",
    "",
    "🤝 Let's build something amazing together!",
    "",
];

pub(crate) const CONTACT: &[&str] = &[
    "📧 CONTACT INFORMATION",
    "═════════════════════",
    "",
    "📧 Email: exodus.tola@example.com",
    "📱 Phone: +251 9XX XXX XXX",
    "📍 Location: Addis Ababa, Ethiopia",
    "",
    "🌐 SOCIAL MEDIA:",
    "├── LinkedIn: /in/exodus-tola",
    "├── GitHub: /exodus-tola",
    "├── Telegram: @exodus_tech (2,500+ subscribers)",
    "└── Twitter: @exodus_tola",
    "",
    "💼 BUSINESS INQUIRIES:",
    "├── Project consultations",
    "├── Speaking engagements",
    "├── Technical mentoring",
    "└── Collaboration opportunities",
    "",
    "⚡ Response time: Usually within 24 hours",
    "",
];

pub(crate) const ACHIEVEMENTS: &[&str] = &[
    "🏆 ACHIEVEMENTS & RECOGNITION",
    "════════════════════════════",
    "",
    "🥇 AWARDS:",
    "├── AgriX Platform Winner - Agricultural Innovation",
    "├── Healthcare Innovation Award - BloodHero Ethiopia",
    "├── Education Technology Grant - $25K",
    "└── Tech Conference Speaker - Addis Tech Community",
    "",
    "📜 CERTIFICATIONS:",
    "├── AWS Solutions Architect",
    "├── Google Cloud Professional",
    "└── MongoDB Certified Developer",
    "",
    "📊 IMPACT METRICS:",
    "├── 69,000+ users served",
    "├── $40K+ funding raised",
    "├── 8 major projects completed",
    "└── 2,500+ community members",
    "",
    "🎯 2024 GOALS:",
    "├── Scale AgriX to 10,000+ farmers",
    "├── Launch EastLink Market",
    "├── Win national innovation competition",
    "└── Expand to other East African countries",
    "",
];

pub(crate) const SOCIAL: &[&str] = &[
    "🌐 SOCIAL MEDIA & COMMUNITY",
    "══════════════════════════",
    "",
    "📢 TELEGRAM CHANNEL (Featured):",
    "├── @exodus_tech",
    "├── 2,500+ subscribers",
    "├── Daily tech insights",
    "└── Ethiopian tech ecosystem news",
    "",
    "💼 PROFESSIONAL:",
    "├── LinkedIn: 1,200+ connections",
    "├── GitHub: 42 repositories, 156 stars",
    "└── Tech Blog: Weekly articles",
    "",
    "🎯 COMMUNITY IMPACT:",
    "├── Mentored 50+ developers",
    "├── Organized 10+ tech meetups",
    "├── Contributed to open source",
    "└── Built local tech network",
    "",
    "📈 ENGAGEMENT STATS:",
    "├── 87% engagement rate",
    "├── 12% monthly growth",
    "└── Active in 5+ tech communities",
    "",
];

pub(crate) const GIT_STATUS: &[&str] = &[
    "📂 GIT REPOSITORY STATUS",
    "═══════════════════════",
    "",
    "🌿 Current Branch: main",
    "📊 Commits Ahead: 3",
    "🔄 Last Commit: 2 hours ago",
    "",
    "📝 MODIFIED FILES:",
    "├── agrix/src/api/weather.js",
    "├── bloodhero/components/DonorMap.tsx",
    "├── unigo/features/navigation.dart",
    "└── portfolio/components/terminal.tsx",
    "",
    "➕ STAGED CHANGES:",
    "├── Add: AI recommendation engine",
    "├── Fix: Mobile responsiveness",
    "└── Update: API documentation",
    "",
    "🚀 READY TO PUSH:",
    "   3 commits ready for deployment",
    "",
];

pub(crate) const DOCKER_PS: &[&str] = &[
    "🐳 DOCKER CONTAINERS",
    "═══════════════════",
    "",
    "CONTAINER ID  IMAGE           STATUS    PORTS",
    "a1b2c3d4      agrix:latest    Up 2h     :3001",
    "e5f6g7h8      bloodhero:v2    Up 1h     :3002",
    "i9j0k1l2      postgres:13     Up 3h     :5432",
    "m3n4o5p6      redis:alpine    Up 3h     :6379",
    "q7r8s9t0      nginx:latest    Up 4h     :80,:443",
    "",
    "📊 CONTAINER STATS:",
    "├── Total Containers: 5",
    "├── Running: 5",
    "├── Stopped: 0",
    "└── Memory Usage: 2.1GB",
    "",
    "🔧 SERVICES:",
    "├── Web Applications: 2",
    "├── Databases: 2",
    "└── Reverse Proxy: 1",
    "",
];

pub(crate) const WEATHER_ADDIS: &[&str] = &[
    "🌤️  ADDIS ABABA WEATHER",
    "═════════════════════",
    "",
    "📍 Location: Addis Ababa, Ethiopia",
    "🌡️  Temperature: 22°C (72°F)",
    "☁️  Condition: Partly Cloudy",
    "💨 Wind: 8 km/h NE",
    "💧 Humidity: 65%",
    "👁️  Visibility: 10 km",
    "",
    "📅 5-DAY FORECAST:",
    "├── Today:    22°C  ☁️  Partly Cloudy",
    "├── Tomorrow: 24°C  ☀️  Sunny",
    "├── Wed:      21°C  🌧️  Light Rain",
    "├── Thu:      23°C  ☁️  Cloudy",
    "└── Fri:      25°C  ☀️  Sunny",
    "",
    "💡 Perfect weather for coding! ☕",
    "",
];

pub(crate) const COFFEE: &[&str] = &[
    "☕ COFFEE STATUS MONITOR",
    "══════════════════════",
    "",
    "📊 Current Status: CAFFEINATED ✅",
    "☕ Cups Today: 4",
    "⏰ Last Cup: 30 minutes ago",
    "🔋 Energy Level: 87%",
    "",
    "📈 COFFEE ANALYTICS:",
    "├── Daily Average: 3.5 cups",
    "├── Weekly Total: 24 cups",
    "├── Favorite: Ethiopian Single Origin",
    "└── Productivity Boost: +42%",
    "",
    "🇪🇹 ETHIOPIAN COFFEE FACTS:",
    "├── Birthplace of coffee",
    "├── Over 1000 varieties",
    "├── Traditional ceremony culture",
    "└── World's finest beans",
    "",
    "💡 \"Code is poetry, coffee is fuel\" ☕",
    "",
];

pub(crate) const EXIT: &[&str] = &[
    "👋 Thanks for exploring Exodus OS Terminal!",
    "   Feel free to close this window or try more commands.",
    "",
];

pub(crate) const FORTUNES: &[&str] = &[
    "\"The best way to predict the future is to invent it.\" - Alan Kay",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Innovation distinguishes between a leader and a follower.\" - Steve Jobs",
    "\"The computer was born to solve problems that did not exist before.\" - Bill Gates",
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
    "\"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.\" - Martin Fowler",
    "\"Experience is the name everyone gives to their mistakes.\" - Oscar Wilde",
    "\"In order to be irreplaceable, one must always be different.\" - Coco Chanel",
    "\"The only way to do great work is to love what you do.\" - Steve Jobs",
];

pub(crate) fn lines(block: &[&str]) -> Vec<String> {
    block.iter().map(|line| (*line).to_string()).collect()
}

pub(crate) fn system(stats: &SystemStats) -> Vec<String> {
    let mut out = lines(&[
        "💻 EXODUS OS SYSTEM INFORMATION",
        "═══════════════════════════════",
        "",
    ]);
    out.push(format!("⏱️  System Uptime:    {}", stats.uptime()));
    out.push(format!("🚀 Active Projects:   {}", stats.projects()));
    out.push(format!("📝 Lines of Code:     {}", stats.lines_of_code()));
    out.push(format!("☕ Coffee Consumed:   {}", stats.coffee_consumed()));
    out.extend(lines(&[
        "",
        "🔧 SYSTEM SPECS:",
        "├── CPU: Intel i7 Developer Brain",
        "├── RAM: 16GB + Unlimited Creativity",
        "├── Storage: Cloud-first Architecture",
        "├── GPU: Imagination Engine v2.0",
        "└── OS: Exodus OS (Custom Linux)",
        "",
        "🌐 NETWORK STATUS:",
        "├── Internet: ✅ Connected",
        "├── GitHub: ✅ Active",
        "├── AWS: ✅ Deployed",
        "└── Telegram: ✅ 2,500+ subscribers",
        "",
    ]));
    out
}

pub(crate) fn ps_aux(stats: &SystemStats) -> Vec<String> {
    let mut out = lines(&[
        "📊 RUNNING PROCESSES",
        "═══════════════════",
        "",
        "PID  USER     CPU  MEM  COMMAND",
        "1    exodus   15%  8%   agrix-backend",
        "2    exodus   12%  6%   bloodhero-api",
        "3    exodus   8%   4%   unigo-mobile-sync",
        "4    exodus   5%   3%   portfolio-server",
        "5    exodus   3%   2%   telegram-bot",
        "6    exodus   2%   1%   github-webhook",
        "7    exodus   1%   1%   system-monitor",
        "",
        "💻 SYSTEM RESOURCES:",
        "├── Total CPU Usage: 46%",
        "├── Total Memory: 25%",
        "├── Active Connections: 247",
    ]);
    out.push(format!("└── Uptime: {}", stats.uptime()));
    out.push(String::new());
    out
}

pub(crate) fn top(stats: &SystemStats) -> Vec<String> {
    let mut out = lines(&["📈 SYSTEM PERFORMANCE MONITOR", "════════════════════════════", ""]);
    out.push(format!("⏱️  Uptime: {}", stats.uptime()));
    out.extend(lines(&[
        "🔥 Load Average: 0.45, 0.52, 0.48",
        "💾 Memory: 6.2GB / 16GB (38%)",
        "💽 Disk: 120GB / 512GB (23%)",
        "",
        "🚀 TOP PROCESSES:",
        "├── AgriX Backend      - 15% CPU",
        "├── BloodHero API      - 12% CPU",
        "├── UniGo Mobile Sync  - 8% CPU",
        "├── Portfolio Server   - 5% CPU",
        "└── Telegram Bot       - 3% CPU",
        "",
        "🌐 NETWORK:",
        "├── Download: 45.2 Mbps",
        "├── Upload: 12.8 Mbps",
        "├── Latency: 23ms",
        "└── Active Connections: 247",
        "",
    ]));
    out
}

pub(crate) fn fortune(quote: &str) -> Vec<String> {
    let mut out = lines(&["🔮 FORTUNE COOKIE", "═══════════════════", ""]);
    out.push(quote.to_string());
    out.extend(lines(&["", "✨ May your code compile on the first try!", ""]));
    out
}

pub(crate) fn login_success(user: &str) -> Vec<String> {
    vec![
        format!("✅ Successfully logged in as: {user}"),
        "🎉 Welcome to Exodus OS!".to_string(),
        String::new(),
    ]
}

pub(crate) const LOGIN_USAGE: &[&str] = &[
    "❌ Please provide a username",
    "💡 Usage: login <username>",
    "",
];

pub(crate) fn not_found(input: &str) -> Vec<String> {
    let mut out = vec![format!("❌ Command not found: {input}")];
    out.extend(lines(&[
        "",
        "💡 Try these popular commands:",
        "   help, matrix, hack, skills, projects",
        "   whoami, system, fortune, coffee",
        "",
        "🎯 Or just type \"help\" to see all available commands!",
        "",
    ]));
    out
}
