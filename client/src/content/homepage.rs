use super::types::ClientLogo;

pub(super) static CLIENT_LOGOS: [ClientLogo; 9] = [
    ClientLogo { name: "HONDA", image: "https://upload.wikimedia.org/wikipedia/commons/7/7b/Honda_Logo.svg" },
    ClientLogo { name: "NISSAN", image: "https://upload.wikimedia.org/wikipedia/commons/0/0d/Nissan_Logo.svg" },
    ClientLogo { name: "RPL", image: "https://res.cloudinary.com/dtny14e7t/image/upload/v1772175930/RPL_Logo.avif" },
    ClientLogo { name: "YAMAHA", image: "https://upload.wikimedia.org/wikipedia/commons/8/8b/Yamaha_Motor_Logo.svg" },
    ClientLogo { name: "SUZUKI", image: "https://upload.wikimedia.org/wikipedia/commons/1/12/Suzuki_logo_2.svg" },
    ClientLogo { name: "TOYOTA", image: "https://upload.wikimedia.org/wikipedia/commons/e/ee/Toyota_Logo.svg" },
    ClientLogo { name: "DAIHATSU", image: "https://upload.wikimedia.org/wikipedia/commons/d/df/Daihatsu_logo.svg" },
    ClientLogo { name: "MITSUBISHI", image: "https://upload.wikimedia.org/wikipedia/commons/b/b7/Mitsubishi-logo.png" },
    ClientLogo { name: "BYD", image: "https://upload.wikimedia.org/wikipedia/commons/b/b7/Misubishi-logo.png" },
];
