//! Static curriculum seed data.
//!
//! This is the initial document for a first run, the fallback when no saved
//! record exists, and the replacement document on reset. Generation is
//! deterministic: two calls yield deep-equal documents, so a reset can be
//! checked against a fresh seed. Ids are ordinal-derived (`task-w3-wed`,
//! `m2-1`) rather than random.
//!
//! Content mirrors the "Complete Data Analyst Bootcamp" curriculum:
//! 5 months, 20 weeks, 7 daily tasks per week, one project per week,
//! 5 milestones, 15 skill assessments, and 17 standalone course projects.

use chrono::NaiveDate;

use crate::model::{
    CourseProject, CourseProjectId, DailyTask, LearningDocument, Milestone, MilestoneItem,
    MilestoneItemId, MilestoneId, Month, MonthId, MonthSummary, Origin, ProjectTask, Reflection,
    SkillAssessment, SkillId, TaskId, Week, WeekId, WeekProject, WeeklyHoursEntry, SCHEMA_VERSION,
};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn daily_tasks(week: u32, topics: [&str; 7]) -> Vec<DailyTask> {
    DAYS.iter()
        .zip(topics)
        .map(|(day, topic)| DailyTask {
            id: TaskId::new(format!("task-w{week}-{}", day.to_lowercase())),
            day: (*day).to_owned(),
            topic: topic.to_owned(),
            hours: 0.0,
            completed: false,
            notes: String::new(),
            origin: Origin::Seed,
        })
        .collect()
}

fn project_tasks(week: u32, descriptions: &[&str]) -> Vec<ProjectTask> {
    descriptions
        .iter()
        .enumerate()
        .map(|(index, description)| ProjectTask {
            id: TaskId::new(format!("project-task-w{week}-{}", index + 1)),
            description: (*description).to_owned(),
            completed: false,
            origin: Origin::Seed,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn week(
    number: u32,
    title: &str,
    topics: [&str; 7],
    project_title: &str,
    tasks: &[&str],
    save_path: &str,
    is_capstone: bool,
) -> Week {
    Week {
        id: WeekId::new(format!("week-{number}")),
        week_number: number,
        title: title.to_owned(),
        start_date: String::new(),
        end_date: String::new(),
        daily_tasks: daily_tasks(number, topics),
        project: WeekProject {
            title: project_title.to_owned(),
            tasks: project_tasks(number, tasks),
            save_path: save_path.to_owned(),
        },
        reflection: Reflection::default(),
        is_capstone,
    }
}

fn month(number: u32, title: &str, focus_area: &str, weeks: Vec<Week>) -> Month {
    Month {
        id: MonthId::new(format!("month-{number}")),
        month_number: number,
        title: title.to_owned(),
        focus_area: focus_area.to_owned(),
        weeks,
        summary: MonthSummary::default(),
    }
}

fn milestone(number: u32, month: u32, title: &str, items: [&str; 4]) -> Milestone {
    Milestone {
        id: MilestoneId::new(format!("milestone-{number}")),
        month,
        title: title.to_owned(),
        items: items
            .iter()
            .enumerate()
            .map(|(index, text)| MilestoneItem {
                id: MilestoneItemId::new(format!("m{number}-{}", index + 1)),
                text: (*text).to_owned(),
                completed: false,
                origin: Origin::Seed,
            })
            .collect(),
        origin: Origin::Seed,
    }
}

fn skill(number: u32, name: &str, month: u32) -> SkillAssessment {
    SkillAssessment {
        id: SkillId::new(format!("skill-{number}")),
        skill: name.to_owned(),
        month,
        initial: 0.0,
        final_rating: 0.0,
    }
}

fn course_project(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    tools: &[&str],
    estimated_hours: f64,
) -> CourseProject {
    CourseProject {
        id: CourseProjectId::new(id),
        title: title.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        tools: tools.iter().map(|t| (*t).to_owned()).collect(),
        estimated_hours,
        completed: false,
        completed_date: None,
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date should be valid")
}

/// Builds the full initial curriculum document.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_document() -> LearningDocument {
    LearningDocument {
        schema_version: SCHEMA_VERSION,
        start_date: ymd(2025, 12, 24),
        target_completion: ymd(2026, 5, 31),
        current_week: 1,
        months: vec![
            month(
                1,
                "Python Programming Fundamentals",
                "Complete Python with Important Libraries",
                vec![
                    week(
                        1,
                        "Course Intro & Python Basics",
                        [
                            "Introduction To The Course",
                            "Getting Started With Python - Installation",
                            "Python Basics - Syntax And Semantics",
                            "Variables In Python",
                            "Basic Data Types In Python",
                            "Operators In Python (Arithmetic, Comparison)",
                            "Operators In Python (Logical, Assignment)",
                        ],
                        "Python Environment Setup",
                        &[
                            "Install Python/Anaconda successfully",
                            "Set up IDE (VS Code/Jupyter)",
                            "Write first Python program",
                            "Practice variable assignments",
                        ],
                        "projects/week-1-python-setup/",
                        false,
                    ),
                    week(
                        2,
                        "Control Flow & Loops",
                        [
                            "Conditional Statements - if Statement",
                            "Conditional Statements - elif Statement",
                            "Conditional Statements - else Statement",
                            "Loops In Python - For Loops",
                            "Loops In Python - While Loops",
                            "Loop Control - break & continue",
                            "Nested Loops Practice",
                        ],
                        "Control Flow Projects",
                        &[
                            "Build a grade calculator",
                            "Create number guessing game",
                            "Implement multiplication tables",
                            "Pattern printing exercises",
                        ],
                        "projects/week-2-control-flow/",
                        false,
                    ),
                    week(
                        3,
                        "Python Data Structures",
                        [
                            "Lists In Python - Basics",
                            "List Methods & Operations",
                            "List Comprehension In Python",
                            "Tuples In Python",
                            "Sets In Python",
                            "Dictionaries In Python - Basics",
                            "Dictionary Methods & Operations",
                        ],
                        "Data Structures Practice",
                        &[
                            "Contact book using dictionaries",
                            "Shopping cart using lists",
                            "Set operations exercises",
                            "Data structure manipulation",
                        ],
                        "projects/week-3-data-structures/",
                        false,
                    ),
                    week(
                        4,
                        "Functions & Data Analysis Libraries",
                        [
                            "Getting Started With Functions",
                            "Function Parameters & Arguments",
                            "Return Values & Scope",
                            "Lambda Functions",
                            "Data Analysis With Python - Intro",
                            "NumPy Basics",
                            "Pandas Basics",
                        ],
                        "Python Fundamentals Capstone",
                        &[
                            "Build reusable utility functions",
                            "Create data processing scripts",
                            "First NumPy array operations",
                            "First Pandas DataFrame operations",
                        ],
                        "projects/week-4-functions/",
                        true,
                    ),
                ],
            ),
            month(
                2,
                "Statistics & Feature Engineering",
                "Statistical Analysis & Data Preparation",
                vec![
                    week(
                        5,
                        "Descriptive Statistics",
                        [
                            "Getting Started With Statistics",
                            "Population vs Sample",
                            "Measures of Central Tendency",
                            "Mean, Median, Mode in Python",
                            "Measures of Dispersion",
                            "Variance & Standard Deviation",
                            "Quartiles, Percentiles & IQR",
                        ],
                        "Descriptive Stats Analysis",
                        &[
                            "Calculate all central tendencies",
                            "Compute dispersion measures",
                            "Create statistical summary",
                            "Visualize distributions",
                        ],
                        "projects/week-5-descriptive-stats/",
                        false,
                    ),
                    week(
                        6,
                        "Probability & Distributions",
                        [
                            "Probability Basics",
                            "Probability Distribution Function",
                            "Types Of Distribution - Normal",
                            "Types Of Distribution - Binomial",
                            "Types Of Distribution - Poisson",
                            "Central Limit Theorem",
                            "Z-scores & Standardization",
                        ],
                        "Distribution Analysis",
                        &[
                            "Analyze data distributions",
                            "Apply normal distribution",
                            "Calculate probabilities",
                            "Visualize different distributions",
                        ],
                        "projects/week-6-distributions/",
                        false,
                    ),
                    week(
                        7,
                        "Inferential Statistics",
                        [
                            "Inferential Stats Introduction",
                            "Hypothesis Testing Basics",
                            "Null & Alternative Hypothesis",
                            "Type I & Type II Errors",
                            "T-Tests (One-sample, Two-sample)",
                            "Chi-Square Tests",
                            "ANOVA & P-values Interpretation",
                        ],
                        "Hypothesis Testing Project",
                        &[
                            "Formulate hypotheses",
                            "Perform t-tests",
                            "Calculate and interpret p-values",
                            "Make data-driven decisions",
                        ],
                        "projects/week-7-hypothesis/",
                        false,
                    ),
                    week(
                        8,
                        "Feature Engineering with Python",
                        [
                            "Feature Engineering Introduction",
                            "Handling Missing Data - Techniques",
                            "Handling Missing Data - Implementation",
                            "Encoding Categorical Variables",
                            "One-Hot & Label Encoding",
                            "Feature Scaling & Normalization",
                            "Feature Selection Techniques",
                        ],
                        "Feature Engineering Pipeline",
                        &[
                            "Handle missing values properly",
                            "Encode all categorical features",
                            "Apply feature scaling",
                            "Build reusable preprocessing pipeline",
                        ],
                        "projects/week-8-feature-eng/",
                        true,
                    ),
                ],
            ),
            month(
                3,
                "EDA & SQL Mastery",
                "Exploratory Data Analysis & Database Querying",
                vec![
                    week(
                        9,
                        "Exploratory Data Analysis",
                        [
                            "EDA Introduction & Importance",
                            "Univariate Analysis",
                            "Bivariate Analysis",
                            "Multivariate Analysis",
                            "EDA with Matplotlib",
                            "EDA with Seaborn",
                            "EDA Best Practices",
                        ],
                        "Complete EDA Project",
                        &[
                            "Perform full EDA on dataset",
                            "Create comprehensive visualizations",
                            "Document key insights",
                            "Generate EDA report",
                        ],
                        "projects/week-9-eda/",
                        false,
                    ),
                    week(
                        10,
                        "SQL Fundamentals",
                        [
                            "SQL Course Introduction & Overview",
                            "Microsoft SQL Server Basics",
                            "SELECT, FROM, WHERE Clauses",
                            "ORDER BY & Sorting",
                            "SQL Basics Questions Practice",
                            "SQL Assignments - Part 1",
                            "SQL Assignments - Part 2",
                        ],
                        "SQL Basics Practice",
                        &[
                            "Set up SQL Server",
                            "Write SELECT queries",
                            "Practice filtering & sorting",
                            "Complete SQL assignments",
                        ],
                        "projects/week-10-sql-basics/",
                        false,
                    ),
                    week(
                        11,
                        "SQL Functions & Aggregations",
                        [
                            "SQL Functions - String Functions",
                            "SQL Functions - Date Functions",
                            "SQL Functions - Numeric Functions",
                            "Aggregate Functions (COUNT, SUM)",
                            "Aggregate Functions (AVG, MIN, MAX)",
                            "GROUP BY & HAVING",
                            "SQL Functions Practice",
                        ],
                        "SQL Functions Project",
                        &[
                            "Use string manipulation functions",
                            "Work with date functions",
                            "Apply aggregate functions",
                            "Create grouped reports",
                        ],
                        "projects/week-11-sql-functions/",
                        false,
                    ),
                    week(
                        12,
                        "Advanced SQL",
                        [
                            "JOINs - INNER JOIN",
                            "JOINs - LEFT, RIGHT, FULL OUTER",
                            "Subqueries & Nested Queries",
                            "CTE (Common Table Expressions)",
                            "Recursive Common Table Expressions",
                            "Stored Procedures & Views",
                            "Indexes & Query Optimization",
                        ],
                        "Advanced SQL Analytics",
                        &[
                            "Write complex JOIN queries",
                            "Create and use CTEs",
                            "Build stored procedures",
                            "Optimize query performance",
                        ],
                        "projects/week-12-advanced-sql/",
                        true,
                    ),
                ],
            ),
            month(
                4,
                "Power BI Mastery",
                "Business Intelligence & Dashboards",
                vec![
                    week(
                        13,
                        "Power BI Fundamentals",
                        [
                            "Power BI Course Introduction",
                            "Introduction to Power BI",
                            "Power BI Desktop Installation",
                            "Connecting to Data Sources",
                            "Power Query Editor Basics",
                            "Data Transformations",
                            "Creating Basic Visualizations",
                        ],
                        "First Power BI Report",
                        &[
                            "Install Power BI Desktop",
                            "Connect to data sources",
                            "Transform data in Power Query",
                            "Create basic charts",
                        ],
                        "projects/week-13-powerbi-basics/",
                        false,
                    ),
                    week(
                        14,
                        "Data Visualization & DAX",
                        [
                            "Data Visualization Best Practices",
                            "Chart Types & When to Use",
                            "DAX Introduction",
                            "DAX - Calculated Columns",
                            "DAX - Measures",
                            "DAX Functions (CALCULATE, FILTER)",
                            "Time Intelligence in DAX",
                        ],
                        "DAX Practice Project",
                        &[
                            "Create calculated columns",
                            "Build custom measures",
                            "Use CALCULATE function",
                            "Implement time intelligence",
                        ],
                        "projects/week-14-dax/",
                        false,
                    ),
                    week(
                        15,
                        "Power BI Projects 1 & 2",
                        [
                            "Power BI Project 1: Sales Data Analysis - Setup",
                            "Project 1: Data Modeling",
                            "Project 1: Creating Visualizations",
                            "Project 1: Building Dashboard",
                            "Power BI Project 2: Insurance Data Analysis - Setup",
                            "Project 2: Analysis & Visualizations",
                            "Project 2: Dashboard Completion",
                        ],
                        "Sales & Insurance Dashboards",
                        &[
                            "Complete Sales Data Analysis dashboard",
                            "Complete Insurance Data Analysis dashboard",
                            "Apply professional styling",
                            "Add interactivity features",
                        ],
                        "projects/week-15-powerbi-projects/",
                        false,
                    ),
                    week(
                        16,
                        "Power BI Project 3 & Advanced",
                        [
                            "Power BI Project 3: UPI Transactions - Setup",
                            "Project 3: Data Analysis",
                            "Project 3: Dashboard Creation",
                            "Miscellaneous Section Power BI",
                            "Power BI Service & Publishing",
                            "Creating GITHUB Account",
                            "Uploading Power BI Projects to GITHUB",
                        ],
                        "UPI Dashboard & Portfolio Setup",
                        &[
                            "Complete UPI Transactions dashboard",
                            "Publish to Power BI Service",
                            "Create GitHub account",
                            "Upload all projects to GitHub",
                        ],
                        "projects/week-16-powerbi-advanced/",
                        true,
                    ),
                ],
            ),
            month(
                5,
                "Excel, Tableau, Snowflake & AI",
                "Additional BI Tools & Capstone Projects",
                vec![
                    week(
                        17,
                        "Microsoft Excel",
                        [
                            "Getting Started with Microsoft Excel",
                            "Excel Formulas & Functions",
                            "Data Analysis in Excel",
                            "Excel Dashboard 1 - Creation",
                            "Excel Dashboard 1 - Completion",
                            "Excel Dashboard 2",
                            "Power Query Editor (MS Excel)",
                        ],
                        "Excel Dashboards",
                        &[
                            "Create Excel Dashboard 1",
                            "Create Excel Dashboard 2",
                            "Use Power Query in Excel",
                            "Connect Excel to SQL Server",
                        ],
                        "projects/week-17-excel/",
                        false,
                    ),
                    week(
                        18,
                        "Tableau",
                        [
                            "Tableau Introduction",
                            "Tableau Desktop Setup",
                            "Connecting to Data in Tableau",
                            "Tableau Visualizations",
                            "Tableau Dashboard 1",
                            "Tableau Dashboard 2",
                            "Tableau Prep Builder",
                        ],
                        "Tableau Dashboards",
                        &[
                            "Create Tableau Dashboard 1",
                            "Create Tableau Dashboard 2",
                            "Use Tableau Prep Builder",
                            "SQL + Tableau Project: Student Depression Analysis",
                        ],
                        "projects/week-18-tableau/",
                        false,
                    ),
                    week(
                        19,
                        "Snowflake & Cloud Integration",
                        [
                            "Snowflake Introduction",
                            "Getting Started with Snowflake",
                            "Connecting Snowflake to Power BI",
                            "Connecting Snowflake to Tableau",
                            "AWS + Snowflake Integration",
                            "AWS + Snowflake + Power BI Project",
                            "AWS + Snowflake + Tableau Project",
                        ],
                        "Cloud Data Analytics",
                        &[
                            "Set up Snowflake account",
                            "Connect Snowflake to BI tools",
                            "Complete AWS + Snowflake + Power BI project",
                            "Complete AWS + Snowflake + Tableau project",
                        ],
                        "projects/week-19-snowflake/",
                        false,
                    ),
                    week(
                        20,
                        "End-to-End Projects & AI Tools",
                        [
                            "New End to End Power BI Project - Dataflow",
                            "Power BI Project - MySQL Database & SQL Server",
                            "Power BI Project - Google Big Query",
                            "Power BI Project - Azure SQL Database",
                            "Projects Using AI Tools - Introduction",
                            "AI Tools for Data Analysis",
                            "Course Completion & Portfolio Review",
                        ],
                        "Final Capstone Portfolio",
                        &[
                            "Complete Dataflow project",
                            "Connect to Google Big Query",
                            "Connect to Azure SQL Database",
                            "Use AI tools for analysis",
                            "Finalize GitHub portfolio",
                            "Update resume with projects",
                        ],
                        "projects/week-20-capstone/",
                        true,
                    ),
                ],
            ),
        ],
        milestones: vec![
            milestone(
                1,
                1,
                "Python Fundamentals Complete",
                [
                    "Comfortable with Python syntax & semantics",
                    "Master all Python data structures",
                    "Can write functions & use libraries",
                    "Started NumPy & Pandas basics",
                ],
            ),
            milestone(
                2,
                2,
                "Statistics & Feature Engineering",
                [
                    "Understand descriptive statistics",
                    "Can perform hypothesis testing",
                    "Master feature engineering techniques",
                    "Built preprocessing pipeline",
                ],
            ),
            milestone(
                3,
                3,
                "EDA & SQL Expert",
                [
                    "Can perform complete EDA",
                    "Proficient with SQL Server",
                    "Master advanced SQL (CTEs, procedures)",
                    "Completed SQL interview questions",
                ],
            ),
            milestone(
                4,
                4,
                "Power BI Master",
                [
                    "Proficient with Power BI Desktop",
                    "Master DAX calculations",
                    "Completed 3 Power BI projects",
                    "Projects uploaded to GitHub",
                ],
            ),
            milestone(
                5,
                5,
                "Full Data Analyst Ready",
                [
                    "Proficient with Excel & dashboards",
                    "Created Tableau dashboards",
                    "Experience with Snowflake & cloud",
                    "Portfolio complete & job-ready",
                ],
            ),
        ],
        skills: vec![
            skill(1, "Python Basics", 1),
            skill(2, "Python Data Structures", 1),
            skill(3, "Functions & Libraries", 1),
            skill(4, "Descriptive Statistics", 2),
            skill(5, "Hypothesis Testing", 2),
            skill(6, "Feature Engineering", 2),
            skill(7, "EDA", 3),
            skill(8, "SQL Basics", 3),
            skill(9, "Advanced SQL", 3),
            skill(10, "Power BI Basics", 4),
            skill(11, "DAX", 4),
            skill(12, "Power BI Projects", 4),
            skill(13, "Microsoft Excel", 5),
            skill(14, "Tableau", 5),
            skill(15, "Snowflake & Cloud", 5),
        ],
        weekly_hours_log: (1..=20)
            .map(|week| WeeklyHoursEntry {
                week,
                target: 5.0,
                actual: 0.0,
                focus: String::new(),
            })
            .collect(),
        course_projects: vec![
            course_project(
                "project-powerbi-1",
                "Sales Data Analysis Dashboard",
                "Power BI",
                "Complete sales data analysis with interactive visualizations, KPIs, and trend analysis",
                &["Power BI", "DAX", "Power Query"],
                4.0,
            ),
            course_project(
                "project-powerbi-2",
                "Insurance Data Analysis Dashboard",
                "Power BI",
                "Insurance claims analysis with customer segmentation and risk assessment visualizations",
                &["Power BI", "DAX", "Power Query"],
                4.0,
            ),
            course_project(
                "project-powerbi-3",
                "UPI Transactions Data Analysis",
                "Power BI",
                "Digital payment transaction analysis with volume trends, merchant insights, and user behavior",
                &["Power BI", "DAX", "Power Query"],
                4.0,
            ),
            course_project(
                "project-powerbi-dataflow",
                "Power BI Dataflow Project",
                "Power BI",
                "End-to-end project using Power BI Dataflow for data transformation and modeling",
                &["Power BI", "Dataflow", "Power Query"],
                3.0,
            ),
            course_project(
                "project-powerbi-mysql",
                "MySQL & SQL Server Integration",
                "Power BI",
                "Connect Power BI to MySQL Database and SQL Server for live data analysis",
                &["Power BI", "MySQL", "SQL Server"],
                3.0,
            ),
            course_project(
                "project-powerbi-bigquery",
                "Google Big Query Integration",
                "Power BI",
                "Connect Power BI to Google Big Query for cloud data analysis",
                &["Power BI", "Google Big Query", "DAX"],
                3.0,
            ),
            course_project(
                "project-powerbi-azure",
                "Azure SQL Database Integration",
                "Power BI",
                "Connect Power BI to Azure SQL Database for enterprise data analysis",
                &["Power BI", "Azure SQL", "DAX"],
                3.0,
            ),
            course_project(
                "project-excel-1",
                "Excel Dashboard 1",
                "Excel",
                "Interactive Excel dashboard with pivot tables, charts, and conditional formatting",
                &["Excel", "Pivot Tables", "Charts"],
                3.0,
            ),
            course_project(
                "project-excel-2",
                "Excel Dashboard 2",
                "Excel",
                "Advanced Excel dashboard with data analysis and visualization",
                &["Excel", "Power Query", "Charts"],
                3.0,
            ),
            course_project(
                "project-excel-sql",
                "Excel Activity: Importing Data From SQL Server",
                "Excel",
                "Connect Excel to SQL Server and create reports with live data",
                &["Excel", "SQL Server", "Power Query"],
                2.0,
            ),
            course_project(
                "project-tableau-1",
                "Tableau Dashboard 1",
                "Tableau",
                "Interactive Tableau dashboard with various chart types and filters",
                &["Tableau Desktop", "Tableau Public"],
                3.0,
            ),
            course_project(
                "project-tableau-2",
                "Tableau Dashboard 2",
                "Tableau",
                "Advanced Tableau dashboard with calculated fields and parameters",
                &["Tableau Desktop", "Tableau Public"],
                3.0,
            ),
            course_project(
                "project-tableau-sql",
                "SQL + Tableau: Student Depression Data Analysis",
                "Tableau",
                "End-to-end analysis combining SQL queries with Tableau visualization",
                &["Tableau", "SQL Server", "Data Analysis"],
                4.0,
            ),
            course_project(
                "project-snowflake-powerbi",
                "AWS + Snowflake + Power BI Project",
                "Snowflake",
                "Cloud data pipeline from AWS through Snowflake to Power BI visualization",
                &["AWS", "Snowflake", "Power BI"],
                4.0,
            ),
            course_project(
                "project-snowflake-tableau",
                "AWS + Snowflake + Tableau Project",
                "Snowflake",
                "Cloud data pipeline from AWS through Snowflake to Tableau visualization",
                &["AWS", "Snowflake", "Tableau"],
                4.0,
            ),
            course_project(
                "project-ai-tools",
                "Projects Using AI Tools",
                "AI Tools",
                "Data analysis projects leveraging AI tools for automation and insights",
                &["ChatGPT", "AI Tools", "Python"],
                3.0,
            ),
            course_project(
                "project-github-portfolio",
                "GitHub Portfolio Setup",
                "Portfolio",
                "Create GitHub account and upload all Power BI, Tableau, and Excel projects",
                &["GitHub", "Git", "Documentation"],
                2.0,
            ),
        ],
    }
}
