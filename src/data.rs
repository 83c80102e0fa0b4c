// Seed listings for the static catalog. This mirrors the frontend's
// data/vehicles module: a fixed array, insertion order is display order.

use crate::models::{
    BodyType, Condition, FuelType, Location, Ownership, Seller, SellerType, Transmission, Vehicle,
};

fn unsplash(photo_id: &str) -> String {
    format!("https://images.unsplash.com/{photo_id}?w=1200&q=80")
}

pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "v1".to_string(),
            slug: "maruti-swift-2021".to_string(),
            make: "Maruti Suzuki".to_string(),
            model: "Swift".to_string(),
            variant: "ZXi Plus".to_string(),
            year: 2021,
            body_type: BodyType::Hatchback,
            color: "Pearl White".to_string(),
            price: 650_000,
            emi: 13_500,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            engine_cc: 1197,
            power: "89 bhp".to_string(),
            torque: "113 Nm".to_string(),
            fuel_efficiency: "23.2 kmpl".to_string(),
            mileage: 28_000,
            seating_capacity: 5,
            ownership: Ownership::First,
            registration_year: 2021,
            registration_state: "Maharashtra".to_string(),
            location: Location {
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
            },
            seller: Seller {
                id: "s1".to_string(),
                name: "Prime Motors".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.6,
                review_count: 212,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: true,
                overall_score: 8.7,
            },
            images: vec![
                unsplash("photo-1549317661-bd32c8ce0db2"),
                unsplash("photo-1502877338535-766e1452684a"),
            ],
            thumbnail_image: unsplash("photo-1549317661-bd32c8ce0db2"),
            is_certified: true,
            is_new_arrival: false,
            rating: 4.5,
            views: 1_845,
            posted_date: "2024-01-12".to_string(),
            description: "Well maintained single-owner Swift with full service history."
                .to_string(),
            features: vec![
                "Touchscreen Infotainment".to_string(),
                "Rear Parking Camera".to_string(),
                "Keyless Entry".to_string(),
            ],
            tags: vec!["budget".to_string(), "city-car".to_string()],
        },
        Vehicle {
            id: "v2".to_string(),
            slug: "hyundai-creta-2022".to_string(),
            make: "Hyundai".to_string(),
            model: "Creta".to_string(),
            variant: "SX(O) Diesel AT".to_string(),
            year: 2022,
            body_type: BodyType::Suv,
            color: "Phantom Black".to_string(),
            price: 1_650_000,
            emi: 34_200,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            engine_cc: 1493,
            power: "113 bhp".to_string(),
            torque: "250 Nm".to_string(),
            fuel_efficiency: "18.5 kmpl".to_string(),
            mileage: 19_500,
            seating_capacity: 5,
            ownership: Ownership::First,
            registration_year: 2022,
            registration_state: "Karnataka".to_string(),
            location: Location {
                city: "Bengaluru".to_string(),
                state: "Karnataka".to_string(),
            },
            seller: Seller {
                id: "s2".to_string(),
                name: "Silicon Wheels".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.8,
                review_count: 341,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: true,
                overall_score: 9.2,
            },
            images: vec![
                unsplash("photo-1519641471654-76ce0107ad1b"),
                unsplash("photo-1606664515524-ed2f786a0bd6"),
                unsplash("photo-1493238792000-8113da705763"),
            ],
            thumbnail_image: unsplash("photo-1519641471654-76ce0107ad1b"),
            is_certified: true,
            is_new_arrival: true,
            rating: 4.8,
            views: 3_420,
            posted_date: "2024-02-03".to_string(),
            description: "Top-end Creta diesel automatic with panoramic sunroof and ventilated seats."
                .to_string(),
            features: vec![
                "Panoramic Sunroof".to_string(),
                "Ventilated Seats".to_string(),
                "BlueLink Connected Car".to_string(),
                "360 Camera".to_string(),
            ],
            tags: vec!["family".to_string(), "suv".to_string()],
        },
        Vehicle {
            id: "v3".to_string(),
            slug: "honda-city-2020".to_string(),
            make: "Honda".to_string(),
            model: "City".to_string(),
            variant: "VX CVT".to_string(),
            year: 2020,
            body_type: BodyType::Sedan,
            color: "Radiant Red".to_string(),
            price: 1_050_000,
            emi: 21_800,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            engine_cc: 1498,
            power: "119 bhp".to_string(),
            torque: "145 Nm".to_string(),
            fuel_efficiency: "18.4 kmpl".to_string(),
            mileage: 41_000,
            seating_capacity: 5,
            ownership: Ownership::Second,
            registration_year: 2020,
            registration_state: "Delhi".to_string(),
            location: Location {
                city: "New Delhi".to_string(),
                state: "Delhi".to_string(),
            },
            seller: Seller {
                id: "s3".to_string(),
                name: "Rohit Sharma".to_string(),
                seller_type: SellerType::Individual,
                rating: 4.2,
                review_count: 18,
            },
            condition: Condition {
                accident_free: true,
                service_history: false,
                warranty_available: false,
                overall_score: 7.9,
            },
            images: vec![unsplash("photo-1590362891991-f776e747a588")],
            thumbnail_image: unsplash("photo-1590362891991-f776e747a588"),
            is_certified: false,
            is_new_arrival: false,
            rating: 4.1,
            views: 980,
            posted_date: "2023-12-28".to_string(),
            description: "Smooth CVT sedan, garage kept, new tyres fitted last year.".to_string(),
            features: vec![
                "Cruise Control".to_string(),
                "LED Headlamps".to_string(),
                "Android Auto".to_string(),
            ],
            tags: vec!["sedan".to_string()],
        },
        Vehicle {
            id: "v4".to_string(),
            slug: "toyota-fortuner-2021".to_string(),
            make: "Toyota".to_string(),
            model: "Fortuner".to_string(),
            variant: "Legender 4x4".to_string(),
            year: 2021,
            body_type: BodyType::Suv,
            color: "White Pearl".to_string(),
            price: 3_850_000,
            emi: 79_900,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            engine_cc: 2755,
            power: "201 bhp".to_string(),
            torque: "500 Nm".to_string(),
            fuel_efficiency: "10.3 kmpl".to_string(),
            mileage: 33_000,
            seating_capacity: 7,
            ownership: Ownership::First,
            registration_year: 2021,
            registration_state: "Haryana".to_string(),
            location: Location {
                city: "Gurugram".to_string(),
                state: "Haryana".to_string(),
            },
            seller: Seller {
                id: "s4".to_string(),
                name: "Galaxy Toyota Certified".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.7,
                review_count: 508,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: true,
                overall_score: 9.0,
            },
            images: vec![
                unsplash("photo-1559416523-140ddc3d238c"),
                unsplash("photo-1625047509168-a7026f36de04"),
            ],
            thumbnail_image: unsplash("photo-1559416523-140ddc3d238c"),
            is_certified: true,
            is_new_arrival: false,
            rating: 4.7,
            views: 5_230,
            posted_date: "2024-01-20".to_string(),
            description: "Flagship Legender 4x4 in immaculate condition, all services at ASC."
                .to_string(),
            features: vec![
                "4x4 Drivetrain".to_string(),
                "JBL Audio".to_string(),
                "Power Tailgate".to_string(),
                "Connected Car Tech".to_string(),
            ],
            tags: vec!["premium".to_string(), "7-seater".to_string()],
        },
        Vehicle {
            id: "v5".to_string(),
            slug: "tata-nexon-ev-2023".to_string(),
            make: "Tata".to_string(),
            model: "Nexon EV".to_string(),
            variant: "Max XZ+ Lux".to_string(),
            year: 2023,
            body_type: BodyType::Electric,
            color: "Intensi-Teal".to_string(),
            price: 1_450_000,
            emi: 30_100,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            engine_cc: 0,
            power: "141 bhp".to_string(),
            torque: "250 Nm".to_string(),
            fuel_efficiency: "437 km range".to_string(),
            mileage: 9_000,
            seating_capacity: 5,
            ownership: Ownership::First,
            registration_year: 2023,
            registration_state: "Maharashtra".to_string(),
            location: Location {
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
            },
            seller: Seller {
                id: "s5".to_string(),
                name: "GreenDrive Hub".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.5,
                review_count: 126,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: true,
                overall_score: 9.4,
            },
            images: vec![
                unsplash("photo-1593941707882-a5bba14938c7"),
                unsplash("photo-1617788138017-80ad40651399"),
            ],
            thumbnail_image: unsplash("photo-1593941707882-a5bba14938c7"),
            is_certified: true,
            is_new_arrival: true,
            rating: 4.6,
            views: 2_760,
            posted_date: "2024-02-10".to_string(),
            description: "Nearly new long-range Nexon EV Max with remaining battery warranty."
                .to_string(),
            features: vec![
                "Ventilated Seats".to_string(),
                "Air Purifier".to_string(),
                "Wireless Charging".to_string(),
            ],
            tags: vec!["electric".to_string(), "new-arrival".to_string()],
        },
        Vehicle {
            id: "v6".to_string(),
            slug: "bmw-3-series-2019".to_string(),
            make: "BMW".to_string(),
            model: "3 Series".to_string(),
            variant: "330i M Sport".to_string(),
            year: 2019,
            body_type: BodyType::Luxury,
            color: "Mediterranean Blue".to_string(),
            price: 3_200_000,
            emi: 66_400,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            engine_cc: 1998,
            power: "255 bhp".to_string(),
            torque: "400 Nm".to_string(),
            fuel_efficiency: "13.0 kmpl".to_string(),
            mileage: 52_000,
            seating_capacity: 5,
            ownership: Ownership::Second,
            registration_year: 2019,
            registration_state: "Telangana".to_string(),
            location: Location {
                city: "Hyderabad".to_string(),
                state: "Telangana".to_string(),
            },
            seller: Seller {
                id: "s6".to_string(),
                name: "Deccan Luxury Cars".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.4,
                review_count: 97,
            },
            condition: Condition {
                accident_free: false,
                service_history: true,
                warranty_available: false,
                overall_score: 7.5,
            },
            images: vec![
                unsplash("photo-1555215695-3004980ad54e"),
                unsplash("photo-1523983388277-336a66bf9bcd"),
            ],
            thumbnail_image: unsplash("photo-1555215695-3004980ad54e"),
            is_certified: false,
            is_new_arrival: false,
            rating: 4.3,
            views: 4_110,
            posted_date: "2023-11-30".to_string(),
            description: "Driver-focused 330i M Sport, minor repaired panel noted in history."
                .to_string(),
            features: vec![
                "M Sport Package".to_string(),
                "Harman Kardon Audio".to_string(),
                "Adaptive LED".to_string(),
            ],
            tags: vec!["luxury".to_string(), "enthusiast".to_string()],
        },
        Vehicle {
            id: "v7".to_string(),
            slug: "mahindra-xuv700-2022".to_string(),
            make: "Mahindra".to_string(),
            model: "XUV700".to_string(),
            variant: "AX7 Diesel AT".to_string(),
            year: 2022,
            body_type: BodyType::Suv,
            color: "Midnight Black".to_string(),
            price: 2_250_000,
            emi: 46_700,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            engine_cc: 2184,
            power: "182 bhp".to_string(),
            torque: "450 Nm".to_string(),
            fuel_efficiency: "14.0 kmpl".to_string(),
            mileage: 24_500,
            seating_capacity: 7,
            ownership: Ownership::First,
            registration_year: 2022,
            registration_state: "Tamil Nadu".to_string(),
            location: Location {
                city: "Chennai".to_string(),
                state: "Tamil Nadu".to_string(),
            },
            seller: Seller {
                id: "s7".to_string(),
                name: "Marina Autos".to_string(),
                seller_type: SellerType::Dealer,
                rating: 4.6,
                review_count: 189,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: true,
                overall_score: 8.9,
            },
            images: vec![unsplash("photo-1617469767053-d3b523a0b982")],
            thumbnail_image: unsplash("photo-1617469767053-d3b523a0b982"),
            is_certified: true,
            is_new_arrival: false,
            rating: 4.5,
            views: 3_050,
            posted_date: "2024-01-05".to_string(),
            description: "Loaded AX7 with ADAS, dual screens and captain-grade comfort."
                .to_string(),
            features: vec![
                "ADAS".to_string(),
                "Dual HD Screens".to_string(),
                "Sony 3D Audio".to_string(),
            ],
            tags: vec!["suv".to_string(), "7-seater".to_string()],
        },
        Vehicle {
            id: "v8".to_string(),
            slug: "ford-mustang-2018".to_string(),
            make: "Ford".to_string(),
            model: "Mustang".to_string(),
            variant: "GT Fastback".to_string(),
            year: 2018,
            body_type: BodyType::Sports,
            color: "Race Red".to_string(),
            price: 6_500_000,
            emi: 134_800,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            engine_cc: 4951,
            power: "395 bhp".to_string(),
            torque: "515 Nm".to_string(),
            fuel_efficiency: "7.9 kmpl".to_string(),
            mileage: 18_000,
            seating_capacity: 4,
            ownership: Ownership::Second,
            registration_year: 2018,
            registration_state: "Punjab".to_string(),
            location: Location {
                city: "Chandigarh".to_string(),
                state: "Punjab".to_string(),
            },
            seller: Seller {
                id: "s8".to_string(),
                name: "Vikram Singh".to_string(),
                seller_type: SellerType::Individual,
                rating: 4.0,
                review_count: 7,
            },
            condition: Condition {
                accident_free: true,
                service_history: true,
                warranty_available: false,
                overall_score: 8.2,
            },
            images: vec![
                unsplash("photo-1584345604476-8ec5e12e42dd"),
                unsplash("photo-1547744152-14d985cb937f"),
            ],
            thumbnail_image: unsplash("photo-1584345604476-8ec5e12e42dd"),
            is_certified: false,
            is_new_arrival: false,
            rating: 4.4,
            views: 7_890,
            posted_date: "2023-10-15".to_string(),
            description: "5.0L V8 GT in collector condition, weekend driven only.".to_string(),
            features: vec![
                "5.0L V8".to_string(),
                "Launch Control".to_string(),
                "Brembo Brakes".to_string(),
            ],
            tags: vec!["sports".to_string(), "v8".to_string()],
        },
    ]
}
