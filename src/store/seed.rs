pub struct SeedEmployee {
    pub id: u64,
    pub name: &'static str,
    pub designation: &'static str,
    pub department: &'static str,
    pub salary: f64,
}

pub const SEED_EMPLOYEES: [SeedEmployee; 10] = [
    SeedEmployee {
        id: 1,
        name: "John Doe",
        designation: "Manager",
        department: "Sales",
        salary: 90000.0,
    },
    SeedEmployee {
        id: 2,
        name: "Anna Brown",
        designation: "Developer",
        department: "Engineering",
        salary: 80000.0,
    },
    SeedEmployee {
        id: 3,
        name: "James Smith",
        designation: "Designer",
        department: "Marketing",
        salary: 70000.0,
    },
    SeedEmployee {
        id: 4,
        name: "Emily Davis",
        designation: "HR Specialist",
        department: "Human Resources",
        salary: 60000.0,
    },
    SeedEmployee {
        id: 5,
        name: "Michael Wilson",
        designation: "Developer",
        department: "Engineering",
        salary: 85000.0,
    },
    SeedEmployee {
        id: 6,
        name: "Sarah Johnson",
        designation: "Data Analyst",
        department: "Data Science",
        salary: 75000.0,
    },
    SeedEmployee {
        id: 7,
        name: "David Lee",
        designation: "QA Engineer",
        department: "Quality Assurance",
        salary: 70000.0,
    },
    SeedEmployee {
        id: 8,
        name: "Linda Martinez",
        designation: "Office Manager",
        department: "Administration",
        salary: 50000.0,
    },
    SeedEmployee {
        id: 9,
        name: "Robert Hernandez",
        designation: "Product Manager",
        department: "Product",
        salary: 95000.0,
    },
    SeedEmployee {
        id: 10,
        name: "Karen Clark",
        designation: "Sales Associate",
        department: "Sales",
        salary: 55000.0,
    },
];
