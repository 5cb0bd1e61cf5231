/// Static skill catalog and the detail-lookup contract.
///
/// `get_skill_details` is total: any name resolves to a record, unknown
/// names degrade to the default record with the queried name substituted.
/// Nothing here can fail at runtime; it is the only "logic" in the content
/// layer.

/// Long-form documentation page for one technology.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillDetail {
    pub name: String,
    pub definition: &'static str,
    pub description: &'static str,
    pub utilities: [&'static str; 4],
    /// Ordered quick-start walkthrough, always exactly four steps.
    pub quick_start: [&'static str; 4],
    pub image: &'static str,
}

/// How a skill entry carries its brand mark: either inline vector markup or
/// an icon-font class name.  A single render function resolves both — no
/// string-prefix sniffing at the call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkillIcon {
    RawMarkup(&'static str),
    FontGlyphClass(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon: SkillIcon,
    /// Proficiency, 0–100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub emblem: char,
    pub skills: [SkillEntry; 4],
}

// ── Category catalog ─────────────────────────────────────────────────────────

const NEXTJS_MARK: &str = r##"<svg viewBox="0 0 128 128"><path fill="#fff" d="M64 0C28.7 0 0 28.7 0 64s28.7 64 64 64 64-28.7 64-64S99.3 0 64 0zm19.8 100.4L35.4 34.6h8.7l39 53.3V34.6h9v65.8h-8.3zM56 87.8h-9V49.2h9v38.6z"/></svg>"##;

const OPENAI_MARK: &str = r##"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M22.28 9.82a5.98 5.98 0 0 0-.52-4.91 6.05 6.05 0 0 0-6.51-2.9A6.07 6.07 0 0 0 4.98 4.18a5.98 5.98 0 0 0-4 2.9 6.05 6.05 0 0 0 .74 7.1 5.98 5.98 0 0 0 .51 4.91 6.05 6.05 0 0 0 6.51 2.9A6 6 0 0 0 13.26 24a6.03 6.03 0 0 0 5.77-4.21 5.99 5.99 0 0 0 4-2.9 6.06 6.06 0 0 0-.75-7.07z"/></svg>"##;

const LANGCHAIN_MARK: &str = r##"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M14.83 12l2.83-2.83a4 4 0 0 0-5.66-5.66l-2.83 2.83 1.42 1.42 2.83-2.83a2 2 0 0 1 2.83 2.83l-2.83 2.83 1.41 1.41zm-5.66 0l-2.83 2.83a4 4 0 0 0 5.66 5.66l2.83-2.83-1.42-1.42-2.83 2.83a2 2 0 0 1-2.83-2.83l2.83-2.83-1.41-1.41zm.71-2.12l4.24 4.24-1.41 1.41-4.24-4.24 1.41-1.41z"/></svg>"##;

const AWS_MARK: &str = r##"<svg viewBox="0 0 128 128"><path fill="#F90" d="M115.9 97.6c-15.9 11.7-38.9 18-58.7 18-27.8 0-52.8-10.3-71.7-27.4-1.5-1.3-.2-3.2 1.6-2.1 20.4 11.9 45.7 19 71.8 19 17.6 0 36.9-3.6 54.7-11.2 2.7-1.1 4.9 1.8 2.3 3.7z"/></svg>"##;

/// The technical arsenal, grouped the way the host's skills section lists it.
pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Frontend",
        emblem: '🎨',
        skills: [
            SkillEntry { name: "React", icon: SkillIcon::FontGlyphClass("devicon-react-original colored"), level: 95 },
            SkillEntry { name: "Next.js", icon: SkillIcon::RawMarkup(NEXTJS_MARK), level: 90 },
            SkillEntry { name: "TypeScript", icon: SkillIcon::FontGlyphClass("devicon-typescript-plain colored"), level: 88 },
            SkillEntry { name: "Tailwind", icon: SkillIcon::FontGlyphClass("devicon-tailwindcss-plain colored"), level: 95 },
        ],
    },
    SkillCategory {
        title: "Design",
        emblem: '🖌',
        skills: [
            SkillEntry { name: "Figma", icon: SkillIcon::FontGlyphClass("devicon-figma-plain"), level: 90 },
            SkillEntry { name: "Adobe XD", icon: SkillIcon::FontGlyphClass("devicon-xd-plain"), level: 85 },
            SkillEntry { name: "Photoshop", icon: SkillIcon::FontGlyphClass("devicon-photoshop-plain"), level: 80 },
            SkillEntry { name: "Canva", icon: SkillIcon::FontGlyphClass("devicon-canva-original"), level: 95 },
        ],
    },
    SkillCategory {
        title: "Backend",
        emblem: '⚙',
        skills: [
            SkillEntry { name: "Node.js", icon: SkillIcon::FontGlyphClass("devicon-nodejs-plain colored"), level: 90 },
            SkillEntry { name: "Python", icon: SkillIcon::FontGlyphClass("devicon-python-plain colored"), level: 88 },
            SkillEntry { name: "Express", icon: SkillIcon::FontGlyphClass("devicon-express-original"), level: 85 },
            SkillEntry { name: "FastAPI", icon: SkillIcon::FontGlyphClass("devicon-fastapi-plain colored"), level: 82 },
        ],
    },
    SkillCategory {
        title: "AI & ML",
        emblem: '🤖',
        skills: [
            SkillEntry { name: "TensorFlow", icon: SkillIcon::FontGlyphClass("devicon-tensorflow-original colored"), level: 80 },
            SkillEntry { name: "PyTorch", icon: SkillIcon::FontGlyphClass("devicon-pytorch-original colored"), level: 75 },
            SkillEntry { name: "OpenAI", icon: SkillIcon::RawMarkup(OPENAI_MARK), level: 85 },
            SkillEntry { name: "LangChain", icon: SkillIcon::RawMarkup(LANGCHAIN_MARK), level: 82 },
        ],
    },
    SkillCategory {
        title: "Database",
        emblem: '🗄',
        skills: [
            SkillEntry { name: "PostgreSQL", icon: SkillIcon::FontGlyphClass("devicon-postgresql-plain colored"), level: 90 },
            SkillEntry { name: "MongoDB", icon: SkillIcon::FontGlyphClass("devicon-mongodb-plain colored"), level: 85 },
            SkillEntry { name: "Redis", icon: SkillIcon::FontGlyphClass("devicon-redis-plain colored"), level: 80 },
            SkillEntry { name: "MySQL", icon: SkillIcon::FontGlyphClass("devicon-mysql-plain colored"), level: 88 },
        ],
    },
    SkillCategory {
        title: "DevOps & Cloud",
        emblem: '☁',
        skills: [
            SkillEntry { name: "Docker", icon: SkillIcon::FontGlyphClass("devicon-docker-plain colored"), level: 85 },
            SkillEntry { name: "AWS", icon: SkillIcon::RawMarkup(AWS_MARK), level: 82 },
            SkillEntry { name: "Git", icon: SkillIcon::FontGlyphClass("devicon-git-plain colored"), level: 92 },
            SkillEntry { name: "Linux", icon: SkillIcon::FontGlyphClass("devicon-linux-plain"), level: 85 },
        ],
    },
];

// ── Detail lookup ────────────────────────────────────────────────────────────

fn detail(
    name: &str,
    definition: &'static str,
    description: &'static str,
    utilities: [&'static str; 4],
    quick_start: [&'static str; 4],
    image: &'static str,
) -> SkillDetail {
    SkillDetail {
        name: name.to_string(),
        definition,
        description,
        utilities,
        quick_start,
        image,
    }
}

/// The record unknown names fall back to (with `name` replaced).
pub fn default_detail() -> SkillDetail {
    detail(
        "Technology",
        "A powerful tool in the modern development stack.",
        "This technology is essential for building robust, scalable, and \
         efficient software solutions.",
        [
            "Efficiency improvement",
            "Scalability",
            "Modern development workflow",
            "Industry standard",
        ],
        [
            "Visit official documentation",
            "Install via package manager",
            "Configure environment",
            "Start coding",
        ],
        "https://via.placeholder.com/150",
    )
}

/// Total lookup over the fixed dictionary.  Never fails: unrecognized names
/// return the default record carrying the queried name.
pub fn get_skill_details(name: &str) -> SkillDetail {
    match name {
        "React" => detail(
            "React",
            "React is a free and open-source front-end JavaScript library for \
             building user interfaces based on components.",
            "Maintained by Meta, React makes it painless to create interactive \
             UIs. Design simple views for each state in your application, and \
             React will efficiently update and render just the right components \
             when your data changes.",
            [
                "Building reusable UI components",
                "Managing complex state efficiently",
                "Creating single-page applications (SPAs)",
                "Virtual DOM for high performance",
            ],
            [
                "Install Node.js",
                "npx create-react-app my-app",
                "cd my-app",
                "npm start",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/react/react-original.svg",
        ),
        "Next.js" => detail(
            "Next.js",
            "Next.js is a React framework that enables functionality such as \
             server-side rendering and generating static websites.",
            "It provides the best developer experience with all the features \
             you need for production: hybrid static & server rendering, \
             TypeScript support, smart bundling, and route pre-fetching.",
            [
                "Server-Side Rendering (SSR)",
                "Static Site Generation (SSG)",
                "API Routes",
                "Automatic Code Splitting",
            ],
            [
                "npx create-next-app@latest",
                "Follow the setup wizard",
                "cd my-next-app",
                "npm run dev",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/nextjs/nextjs-original.svg",
        ),
        "TypeScript" => detail(
            "TypeScript",
            "TypeScript is a strongly typed programming language that builds \
             on JavaScript, giving you better tooling at any scale.",
            "It adds static type definitions to JavaScript to help you \
             identify problems before you run your code, catching errors and \
             providing fixes before runtime.",
            [
                "Static typing for JavaScript",
                "Enhanced IDE support & Autocomplete",
                "Catching errors at compile-time",
                "Easier refactoring of large codebases",
            ],
            [
                "npm install -g typescript",
                "tsc --init",
                "Create .ts files",
                "tsc index.ts",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/typescript/typescript-original.svg",
        ),
        "Tailwind" => detail(
            "Tailwind CSS",
            "A utility-first CSS framework packed with classes that can be \
             composed to build any design, directly in your markup.",
            "Tailwind allows you to build modern websites rapidly without \
             leaving your HTML. It's highly customizable and optimizes for \
             production by removing unused CSS.",
            [
                "Rapid UI development",
                "Responsive design made easy",
                "Highly customizable design system",
                "Small bundle size in production",
            ],
            [
                "npm install -D tailwindcss",
                "npx tailwindcss init",
                "Configure tailwind.config.js",
                "Add directives to CSS",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/tailwindcss/tailwindcss-original.svg",
        ),
        "Figma" => detail(
            "Figma",
            "Figma is a collaborative interface design tool, with robust \
             vector graphics editing and prototyping capabilities.",
            "It runs in the browser, making it easy for teams to create, \
             test, and ship better designs from start to finish. It's the \
             industry standard for UI/UX design.",
            [
                "Real-time collaboration",
                "Vector networks",
                "Interactive prototyping",
                "Design systems management",
            ],
            [
                "Sign up at figma.com",
                "Create a new design file",
                "Create a frame (press F)",
                "Start designing!",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/figma/figma-original.svg",
        ),
        "Adobe XD" => detail(
            "Adobe XD",
            "Adobe XD is a vector-based user experience design tool for web \
             apps and mobile apps.",
            "It allows you to wireframe, design, prototype, present, and \
             share experiences for web, mobile, voice, and more.",
            [
                "Wireframing & Prototyping",
                "Voice prototyping",
                "Auto-animate transitions",
                "Adobe Creative Cloud integration",
            ],
            [
                "Install via Creative Cloud",
                "Select artboard size",
                "Design UI elements",
                "Switch to Prototype mode",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/xd/xd-plain.svg",
        ),
        "Photoshop" => detail(
            "Adobe Photoshop",
            "The world's best imaging and graphic design software.",
            "From photo editing and compositing to digital painting, \
             animation, and graphic design, Photoshop is the tool for \
             creative professionals.",
            [
                "Photo editing & manipulation",
                "Digital painting",
                "Graphic design",
                "Web layout design",
            ],
            [
                "Install Photoshop",
                "Create new document",
                "Select tools from toolbar",
                "Work with layers",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/photoshop/photoshop-plain.svg",
        ),
        "Canva" => detail(
            "Canva",
            "Canva is a free-to-use online graphic design tool.",
            "Use it to create social media posts, presentations, posters, \
             videos, logos and more through a simple drag-and-drop interface.",
            [
                "Quick graphic creation",
                "Social media templates",
                "Presentation design",
                "Brand kit management",
            ],
            [
                "Go to canva.com",
                "Choose a template",
                "Drag & drop elements",
                "Download or share",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/canva/canva-original.svg",
        ),
        "Node.js" => detail(
            "Node.js",
            "Node.js is a JavaScript runtime built on Chrome's V8 JavaScript \
             engine.",
            "It uses an event-driven, non-blocking I/O model that makes it \
             lightweight and efficient, perfect for data-intensive real-time \
             applications.",
            [
                "Building scalable network apps",
                "Server-side scripting",
                "Real-time services (Chat, Gaming)",
                "RESTful API development",
            ],
            [
                "Install Node.js",
                "Create server.js",
                "Write HTTP server code",
                "node server.js",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/nodejs/nodejs-original.svg",
        ),
        "Python" => detail(
            "Python",
            "Python is an interpreted, high-level and general-purpose \
             programming language.",
            "Known for its readability and vast ecosystem, Python is widely \
             used in web development, data science, AI, and automation.",
            [
                "Web Development (Django, Flask)",
                "Data Science & Analytics",
                "Artificial Intelligence",
                "Scripting & Automation",
            ],
            [
                "Install Python",
                "Create script.py",
                "print('Hello World')",
                "python script.py",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/python/python-original.svg",
        ),
        "Express" => detail(
            "Express.js",
            "Fast, unopinionated, minimalist web framework for Node.js.",
            "It provides a robust set of features for web and mobile \
             applications and facilitates the rapid development of Node \
             based web applications.",
            [
                "Building web servers",
                "API development",
                "Middleware integration",
                "Routing management",
            ],
            [
                "npm install express",
                "const app = express()",
                "Define routes",
                "app.listen(3000)",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/express/express-original.svg",
        ),
        "FastAPI" => detail(
            "FastAPI",
            "FastAPI is a modern, fast (high-performance) web framework for \
             building APIs with Python 3.6+.",
            "It is based on standard Python type hints and is one of the \
             fastest Python frameworks available, on par with NodeJS and Go.",
            [
                "High performance APIs",
                "Automatic interactive documentation",
                "Easy data validation",
                "Async support",
            ],
            [
                "pip install fastapi uvicorn",
                "Create main.py",
                "Define app = FastAPI()",
                "uvicorn main:app --reload",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/fastapi/fastapi-original.svg",
        ),
        "TensorFlow" => detail(
            "TensorFlow",
            "An end-to-end open source platform for machine learning.",
            "It has a comprehensive, flexible ecosystem of tools, libraries \
             and community resources for building and deploying ML powered \
             applications.",
            [
                "Deep Learning models",
                "Neural Networks",
                "Model deployment (TFLite, TFJS)",
                "Scientific computing",
            ],
            [
                "pip install tensorflow",
                "Import tensorflow as tf",
                "Build your model",
                "Train and evaluate",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/tensorflow/tensorflow-original.svg",
        ),
        "PyTorch" => detail(
            "PyTorch",
            "An open source machine learning framework that accelerates the \
             path from research prototyping to production deployment.",
            "Developed by Meta, it offers a dynamic computational graph and \
             is widely loved by researchers for its flexibility and Pythonic \
             nature.",
            [
                "Computer Vision",
                "Natural Language Processing",
                "Reinforcement Learning",
                "Dynamic Neural Networks",
            ],
            [
                "pip install torch",
                "import torch",
                "Define tensors/models",
                "Run training loop",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/pytorch/pytorch-original.svg",
        ),
        "OpenAI" => detail(
            "OpenAI API",
            "An API providing access to powerful AI models like GPT-4 and \
             DALL-E.",
            "Developers can use the API to build applications that understand \
             and generate natural language or code, generate images, and more.",
            [
                "Text generation & completion",
                "Code generation",
                "Image generation",
                "Semantic search & embeddings",
            ],
            [
                "Get API Key",
                "pip install openai",
                "Initialize client",
                "Make API calls",
            ],
            "https://upload.wikimedia.org/wikipedia/commons/4/4d/OpenAI_Logo.svg",
        ),
        "LangChain" => detail(
            "LangChain",
            "A framework for developing applications powered by language \
             models.",
            "It enables applications that are context-aware and reason based \
             on the provided context, making it easier to build complex LLM \
             applications.",
            [
                "Chaining LLM calls",
                "Document loading & parsing",
                "Chat history management",
                "Agent creation",
            ],
            [
                "pip install langchain",
                "Define LLM wrapper",
                "Create prompt templates",
                "Run chains",
            ],
            "https://raw.githubusercontent.com/langchain-ai/langchain/master/docs/static/img/langchain_logo.png",
        ),
        "PostgreSQL" => detail(
            "PostgreSQL",
            "A powerful, open source object-relational database system.",
            "It uses and extends the SQL language combined with many features \
             that safely store and scale the most complicated data workloads.",
            [
                "Complex relational queries",
                "JSON storage (NoSQL capabilities)",
                "Data integrity & ACID compliance",
                "Geospatial data (PostGIS)",
            ],
            [
                "Install PostgreSQL",
                "Create database",
                "Connect via client/CLI",
                "Execute SQL queries",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/postgresql/postgresql-original.svg",
        ),
        "MongoDB" => detail(
            "MongoDB",
            "A source-available cross-platform document-oriented database \
             program.",
            "Classified as a NoSQL database program, MongoDB uses JSON-like \
             documents with optional schemas, making it flexible and scalable.",
            [
                "Flexible document schema",
                "High scalability & sharding",
                "Rapid prototyping",
                "Big data storage",
            ],
            [
                "Install MongoDB / Atlas",
                "Connect via driver",
                "Insert documents",
                "Query collections",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/mongodb/mongodb-original.svg",
        ),
        "Redis" => detail(
            "Redis",
            "An in-memory data structure store, used as a database, cache, \
             and message broker.",
            "It supports strings, hashes, lists, sets, sorted sets with range \
             queries, bitmaps, geospatial indexes, and streams.",
            [
                "High-speed caching",
                "Session management",
                "Real-time analytics",
                "Message queuing (Pub/Sub)",
            ],
            [
                "Install Redis server",
                "redis-cli",
                "SET key value",
                "GET key",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/redis/redis-original.svg",
        ),
        "MySQL" => detail(
            "MySQL",
            "An open-source relational database management system.",
            "It is widely used for web applications and is a central \
             component of the LAMP open-source web application software stack.",
            [
                "Structured data storage",
                "Transaction support",
                "Web application backends",
                "Data warehousing",
            ],
            [
                "Install MySQL Server",
                "Secure installation",
                "Create user & DB",
                "Connect and query",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/mysql/mysql-original.svg",
        ),
        "Docker" => detail(
            "Docker",
            "A set of platform as a service products that use OS-level \
             virtualization to deliver software in packages called containers.",
            "Containers are isolated from one another and bundle their own \
             software, libraries and configuration files; they communicate \
             through well-defined channels.",
            [
                "Application containerization",
                "Consistent environments",
                "Microservices deployment",
                "CI/CD integration",
            ],
            [
                "Install Docker Desktop",
                "Create Dockerfile",
                "docker build -t my-app .",
                "docker run my-app",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/docker/docker-original.svg",
        ),
        "AWS" => detail(
            "Amazon Web Services",
            "A comprehensive, evolving cloud computing platform provided by \
             Amazon.",
            "It offers a wide range of services including computing power, \
             database storage, and content delivery to help businesses scale \
             and grow.",
            [
                "Cloud computing (EC2)",
                "Serverless functions (Lambda)",
                "Storage solutions (S3)",
                "Managed databases (RDS)",
            ],
            [
                "Create AWS Account",
                "Set up IAM user",
                "Choose service (e.g., S3)",
                "Deploy/Configure",
            ],
            "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg",
        ),
        "Git" => detail(
            "Git",
            "A free and open source distributed version control system \
             designed to handle projects of any size with speed and \
             efficiency.",
            "Git is easy to learn and has a tiny footprint with lightning \
             fast performance, outclassing older SCM tools.",
            [
                "Source code management",
                "Collaboration & merging",
                "History tracking",
                "Branching workflows",
            ],
            [
                "git init",
                "git add .",
                "git commit -m 'Initial commit'",
                "git push origin main",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/git/git-original.svg",
        ),
        "Linux" => detail(
            "Linux",
            "A family of open-source Unix-like operating systems based on the \
             Linux kernel.",
            "Linux is the leading operating system on servers and other big \
             iron systems, and the only OS used on TOP500 supercomputers.",
            [
                "Server OS environment",
                "Command line power",
                "Scripting (Bash)",
                "System administration",
            ],
            [
                "Install Distro (Ubuntu/Arch)",
                "Open Terminal",
                "Update packages (apt/pacman)",
                "Explore filesystem",
            ],
            "https://cdn.jsdelivr.net/npm/devicon@2.16.0/icons/linux/linux-original.svg",
        ),
        unknown => SkillDetail {
            name: unknown.to_string(),
            ..default_detail()
        },
    }
}
